use serde::Serialize;

/// Inputs of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Surname,
    Age,
    Sex,
    EnrollmentType,
    PaymentType,
    PaymentReference,
    Amount,
    ParticipationType,
}

impl FormField {
    /// Backend field name
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Surname => "apellido",
            Self::Age => "edad",
            Self::Sex => "sexo",
            Self::EnrollmentType => "tipo_matricula",
            Self::PaymentType => "tipo_pago",
            Self::PaymentReference => "referencia_pago",
            Self::Amount => "monto",
            Self::ParticipationType => "tipo_asamblea",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::Age => "Age",
            Self::Sex => "Sex",
            Self::EnrollmentType => "Enrollment type",
            Self::PaymentType => "Payment type",
            Self::PaymentReference => "Payment reference",
            Self::Amount => "Amount",
            Self::ParticipationType => "Participation type",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
