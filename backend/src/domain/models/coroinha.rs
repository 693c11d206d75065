use chrono::NaiveDate;
use uuid::Uuid;

/// Domain model for one altar server's registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Coroinha {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub date_of_birth: NaiveDate,
    pub availability: Availability,
}

/// Services the altar server can attend. `None` means the flag was never set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    pub saturday: Option<bool>,
    pub sunday: Option<bool>,
    pub wednesday: Option<bool>,
    pub first_friday: Option<bool>,
}

/// A record that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoroinha {
    pub full_name: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_contact: Option<String>,
    pub date_of_birth: NaiveDate,
    pub availability: Availability,
}

impl NewCoroinha {
    pub fn with_id(self, id: Uuid) -> Coroinha {
        Coroinha {
            id,
            full_name: self.full_name,
            guardian_name: self.guardian_name,
            guardian_contact: self.guardian_contact,
            date_of_birth: self.date_of_birth,
            availability: self.availability,
        }
    }
}

/// Partial update. Fields left as `None` keep their stored value; the text
/// fields take `Some(None)` to clear them. `availability` is replaced as a
/// whole when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoroinhaPatch {
    pub full_name: Option<Option<String>>,
    pub guardian_name: Option<Option<String>>,
    pub guardian_contact: Option<Option<String>>,
    pub date_of_birth: Option<NaiveDate>,
    pub availability: Option<Availability>,
}
