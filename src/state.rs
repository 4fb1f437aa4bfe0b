use crate::{
    models::{appointments::Appointment, doctors, doctors::Doctor, users::User},
    store::{MemoryStore, Store},
};

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub doctors: Box<dyn Store<Doctor>>,
    pub appointments: Box<dyn Store<Appointment>>,
    pub users: Box<dyn Store<User>>,
}

impl AppState {
    pub fn new(
        doctors: Box<dyn Store<Doctor>>,
        appointments: Box<dyn Store<Appointment>>,
        users: Box<dyn Store<User>>,
    ) -> Self {
        Self {
            doctors,
            appointments,
            users,
        }
    }

    /// Seeded doctor directory, no appointments, no users.
    pub fn seeded() -> Self {
        Self::new(
            Box::new(MemoryStore::seeded(doctors::seed())),
            Box::new(MemoryStore::<Appointment>::new()),
            Box::new(MemoryStore::<User>::new()),
        )
    }
}
