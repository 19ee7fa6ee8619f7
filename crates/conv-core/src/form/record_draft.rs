use crate::{
    EnrollmentType, FieldErrors, FormField, MAX_AGE, MAX_AMOUNT, MAX_TEXT_LENGTH, MIN_AGE,
    MIN_AMOUNT, NewRecord, ParticipationType, PaymentType, Sex,
};

use std::str::FromStr;

use serde::Serialize;

/// Raw, unvalidated inputs of the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDraft {
    pub nombre: String,
    pub apellido: String,
    pub edad: String,
    pub sexo: String,
    pub tipo_matricula: String,
    pub tipo_pago: String,
    pub referencia_pago: String,
    pub monto: String,
    pub tipo_asamblea: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            apellido: String::new(),
            edad: String::new(),
            sexo: String::new(),
            tipo_matricula: EnrollmentType::default().as_str().to_string(),
            tipo_pago: PaymentType::default().as_str().to_string(),
            referencia_pago: String::new(),
            monto: String::new(),
            tipo_asamblea: String::new(),
        }
    }
}

impl RecordDraft {
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check every field and build the submission payload.
    ///
    /// All fields are checked so the caller can mark every offending input
    /// at once, not only the first.
    pub fn validate(&self) -> Result<NewRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let nombre = required_text(&self.nombre, FormField::Name, &mut errors);
        let apellido = required_text(&self.apellido, FormField::Surname, &mut errors);
        let edad = optional_age(&self.edad, &mut errors);
        let sexo = required_choice::<Sex>(&self.sexo, FormField::Sex, &mut errors);
        let tipo_matricula = required_choice::<EnrollmentType>(
            &self.tipo_matricula,
            FormField::EnrollmentType,
            &mut errors,
        );
        let tipo_pago =
            required_choice::<PaymentType>(&self.tipo_pago, FormField::PaymentType, &mut errors);
        let referencia_pago =
            required_text(&self.referencia_pago, FormField::PaymentReference, &mut errors);
        let monto = amount(&self.monto, &mut errors);
        let tipo_asamblea = required_choice::<ParticipationType>(
            &self.tipo_asamblea,
            FormField::ParticipationType,
            &mut errors,
        );

        match (
            nombre,
            apellido,
            sexo,
            tipo_matricula,
            tipo_pago,
            referencia_pago,
            monto,
            tipo_asamblea,
        ) {
            (
                Some(nombre),
                Some(apellido),
                Some(sexo),
                Some(tipo_matricula),
                Some(tipo_pago),
                Some(referencia_pago),
                Some(monto),
                Some(tipo_asamblea),
            ) if errors.is_empty() => Ok(NewRecord {
                nombre,
                apellido,
                edad,
                sexo,
                tipo_matricula,
                tipo_pago,
                referencia_pago,
                monto,
                tipo_asamblea,
                usuario_id: None,
                zona_id: None,
            }),
            _ => Err(errors),
        }
    }
}

fn required_text(value: &str, field: FormField, errors: &mut FieldErrors) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{} is required", field.label()));
        return None;
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        errors.add(field, format!("At most {MAX_TEXT_LENGTH} characters"));
        return None;
    }
    Some(trimmed.to_string())
}

fn required_choice<T: FromStr>(
    value: &str,
    field: FormField,
    errors: &mut FieldErrors,
) -> Option<T> {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", field.label()));
        return None;
    }
    match value.parse::<T>() {
        Ok(choice) => Some(choice),
        Err(_) => {
            errors.add(field, format!("Unknown {}: {}", field.label().to_lowercase(), value));
            None
        }
    }
}

fn optional_age(value: &str, errors: &mut FieldErrors) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let age = match value.parse::<i64>() {
        Ok(age) => age,
        Err(_) => {
            let message = if value.parse::<f64>().is_ok() {
                "Age must be a whole number"
            } else {
                "Age must be a number"
            };
            errors.add(FormField::Age, message);
            return None;
        }
    };

    if age < i64::from(MIN_AGE) {
        errors.add(FormField::Age, format!("Age must be at least {MIN_AGE}"));
        return None;
    }
    if age > i64::from(MAX_AGE) {
        errors.add(FormField::Age, format!("Age must be at most {MAX_AGE}"));
        return None;
    }
    u32::try_from(age).ok()
}

fn amount(value: &str, errors: &mut FieldErrors) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(FormField::Amount, "Amount is required");
        return None;
    }

    let amount = match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => {
            errors.add(FormField::Amount, "Amount must be a number");
            return None;
        }
    };

    if amount < MIN_AMOUNT {
        errors.add(FormField::Amount, "Amount cannot be negative");
        return None;
    }
    if amount > MAX_AMOUNT {
        errors.add(FormField::Amount, "Amount is too high");
        return None;
    }
    Some(amount)
}
