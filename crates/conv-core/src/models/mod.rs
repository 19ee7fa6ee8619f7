pub mod enrollment_type;
pub mod new_record;
pub mod participation_type;
pub mod payment_type;
pub mod record;
pub mod session;
pub mod sex;
pub mod statistics;
pub mod user_profile;
