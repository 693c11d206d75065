use crate::domain::commands::coroinha::{CreateCoroinhaCommand, UpdateCoroinhaCommand};
use crate::domain::models::coroinha::{Availability as DomainAvailability, Coroinha as DomainCoroinha};
use shared::{Availability as SharedAvailability, Coroinha as SharedCoroinha, CoroinhaRequest};

/// Mapper between the shared roster DTOs and the domain model.
pub struct CoroinhaMapper;

impl CoroinhaMapper {
    pub fn to_create_command(request: CoroinhaRequest) -> CreateCoroinhaCommand {
        // On create an explicit null is the same as leaving the field out
        CreateCoroinhaCommand {
            full_name: request.full_name.flatten(),
            guardian_name: request.guardian_name.flatten(),
            guardian_contact: request.guardian_contact.flatten(),
            date_of_birth: request.date_of_birth.flatten(),
            availability: request.availability.flatten().map(Self::availability_to_domain),
        }
    }

    pub fn to_update_command(id: String, request: CoroinhaRequest) -> UpdateCoroinhaCommand {
        UpdateCoroinhaCommand {
            id,
            full_name: request.full_name,
            guardian_name: request.guardian_name,
            guardian_contact: request.guardian_contact,
            date_of_birth: request.date_of_birth,
            availability: request
                .availability
                .map(|availability| availability.map(Self::availability_to_domain)),
        }
    }

    pub fn to_dto(domain: DomainCoroinha) -> SharedCoroinha {
        SharedCoroinha {
            id: domain.id.to_string(),
            full_name: domain.full_name,
            guardian_name: domain.guardian_name,
            guardian_contact: domain.guardian_contact,
            date_of_birth: domain.date_of_birth,
            availability: Self::availability_to_dto(domain.availability),
        }
    }

    pub fn to_dto_list(domain: Vec<DomainCoroinha>) -> Vec<SharedCoroinha> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    fn availability_to_domain(dto: SharedAvailability) -> DomainAvailability {
        DomainAvailability {
            saturday: dto.saturday,
            sunday: dto.sunday,
            wednesday: dto.wednesday,
            first_friday: dto.first_friday,
        }
    }

    fn availability_to_dto(domain: DomainAvailability) -> SharedAvailability {
        SharedAvailability {
            saturday: domain.saturday,
            sunday: domain.sunday,
            wednesday: domain.wednesday,
            first_friday: domain.first_friday,
        }
    }
}
