use clap::{Args, Subcommand};
use conv_config::ListView;
use conv_core::{CategoryFilter, RecordDraft, SexFilter, SortKey};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        username: String,

        /// Falls back to the CONV_PASSWORD environment variable
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session (the backend is not contacted)
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Ask the backend whether the stored token is still valid
        #[arg(long)]
        verify: bool,
    },

    /// Register an attendee
    Register(RegisterArgs),

    /// List registered attendees
    List(ListArgs),

    /// Registration totals for the dashboard
    Stats,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub surname: String,

    #[arg(long)]
    pub age: Option<String>,

    /// Masculino or Femenino (male/female accepted)
    #[arg(long)]
    pub sex: String,

    /// normal or combo
    #[arg(long, default_value = "normal")]
    pub enrollment: String,

    /// divisa, pago_movil or transferencia
    #[arg(long, default_value = "pago_movil")]
    pub payment: String,

    /// Payment reference
    #[arg(long)]
    pub reference: String,

    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Niño, Asambleista, Visitante or Invitado Especial
    #[arg(long)]
    pub participation: String,

    /// Do not print the refreshed list after registering
    #[arg(long)]
    pub quiet: bool,
}

impl RegisterArgs {
    /// Form inputs as typed; validation happens on submit
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            nombre: self.name.clone(),
            apellido: self.surname.clone(),
            edad: self.age.clone().unwrap_or_default(),
            sexo: self.sex.clone(),
            tipo_matricula: self.enrollment.clone(),
            tipo_pago: self.payment.clone(),
            referencia_pago: self.reference.clone(),
            monto: self.amount.clone(),
            tipo_asamblea: self.participation.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, surname, reference and types
    #[arg(long)]
    pub search: Option<String>,

    /// all, minors or assembly-members
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// all, male or female
    #[arg(long)]
    pub sex: Option<SexFilter>,

    /// name, surname, age, enrollment, payment, reference, amount or registered
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: Option<u64>,

    /// 5, 10 or 25 (defaults to list.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// table or cards (defaults to list.view)
    #[arg(long)]
    pub view: Option<ListView>,
}
