//! Domain-level command types.
//! The REST layer maps the public DTOs from the `shared` crate to these.

pub mod coroinha {
    use crate::domain::models::coroinha::Availability;

    /// Input for registering a new altar server.
    #[derive(Debug, Clone, Default)]
    pub struct CreateCoroinhaCommand {
        pub full_name: Option<String>,
        pub guardian_name: Option<String>,
        pub guardian_contact: Option<String>,
        /// Raw `DD/MM/YY` text, parsed by the service
        pub date_of_birth: Option<String>,
        pub availability: Option<Availability>,
    }

    /// Partial update of an existing record.
    /// `None` leaves a field alone; `Some(None)` is an explicit null.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateCoroinhaCommand {
        pub id: String,
        pub full_name: Option<Option<String>>,
        pub guardian_name: Option<Option<String>>,
        pub guardian_contact: Option<Option<String>>,
        pub date_of_birth: Option<Option<String>>,
        pub availability: Option<Option<Availability>>,
    }
}

pub mod auth {
    /// Credentials submitted to the login endpoint.
    #[derive(Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
    }

    impl std::fmt::Debug for LoginCommand {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("LoginCommand")
                .field("username", &self.username)
                .field("password", &"<redacted>")
                .finish()
        }
    }

    /// Result of a successful login.
    #[derive(Debug, Clone)]
    pub struct LoginResult {
        pub token: String,
    }
}
