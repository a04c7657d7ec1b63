//! Demo data for a freshly started clinic

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::info;

use super::repositories::{OwnerRepository, Repository, VetRepository};
use crate::application::errors::RepositoryError;
use crate::domain::{Owner, Pet, PetType, Specialty, Vet};

const PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];

const VETS: [(&str, &str, &[&str]); 6] = [
    ("James", "Carter", &[]),
    ("Helen", "Leary", &["radiology"]),
    ("Linda", "Douglas", &["surgery", "dentistry"]),
    ("Rafael", "Ortega", &["surgery"]),
    ("Henry", "Stevens", &["radiology"]),
    ("Sharon", "Jenkins", &[]),
];

struct SeedOwner {
    first_name: &'static str,
    last_name: &'static str,
    address: &'static str,
    city: &'static str,
    telephone: &'static str,
    pets: &'static [SeedPet],
}

struct SeedPet {
    name: &'static str,
    born: (i32, u32, u32),
    pet_type: &'static str,
}

const fn pet(name: &'static str, born: (i32, u32, u32), pet_type: &'static str) -> SeedPet {
    SeedPet {
        name,
        born,
        pet_type,
    }
}

const OWNERS: [SeedOwner; 10] = [
    SeedOwner {
        first_name: "George",
        last_name: "Franklin",
        address: "110 W. Liberty St.",
        city: "Madison",
        telephone: "6085551023",
        pets: &[pet("Leo", (2010, 9, 7), "cat")],
    },
    SeedOwner {
        first_name: "Betty",
        last_name: "Davis",
        address: "638 Cardinal Ave.",
        city: "Sun Prairie",
        telephone: "6085551749",
        pets: &[pet("Basil", (2012, 8, 6), "hamster")],
    },
    SeedOwner {
        first_name: "Eduardo",
        last_name: "Rodriquez",
        address: "2693 Commerce St.",
        city: "McFarland",
        telephone: "6085558763",
        pets: &[
            pet("Rosy", (2011, 4, 17), "dog"),
            pet("Jewel", (2010, 3, 7), "dog"),
        ],
    },
    SeedOwner {
        first_name: "Harold",
        last_name: "Davis",
        address: "563 Friendly St.",
        city: "Windsor",
        telephone: "6085553198",
        pets: &[pet("Iggy", (2010, 11, 30), "lizard")],
    },
    SeedOwner {
        first_name: "Peter",
        last_name: "McTavish",
        address: "2387 S. Fair Way",
        city: "Madison",
        telephone: "6085552765",
        pets: &[pet("George", (2010, 1, 20), "snake")],
    },
    SeedOwner {
        first_name: "Jean",
        last_name: "Coleman",
        address: "105 N. Lake St.",
        city: "Monona",
        telephone: "6085552654",
        pets: &[
            pet("Samantha", (2012, 9, 4), "cat"),
            pet("Max", (2012, 9, 4), "cat"),
        ],
    },
    SeedOwner {
        first_name: "Jeff",
        last_name: "Black",
        address: "1450 Oak Blvd.",
        city: "Monona",
        telephone: "6085555387",
        pets: &[pet("Lucky", (2011, 8, 6), "bird")],
    },
    SeedOwner {
        first_name: "Maria",
        last_name: "Escobito",
        address: "345 Maple St.",
        city: "Madison",
        telephone: "6085557683",
        pets: &[pet("Mulligan", (2007, 2, 24), "dog")],
    },
    SeedOwner {
        first_name: "David",
        last_name: "Schroeder",
        address: "2749 Blackhawk Trail",
        city: "Madison",
        telephone: "6085559435",
        pets: &[pet("Freddy", (2010, 3, 9), "bird")],
    },
    SeedOwner {
        first_name: "Carlos",
        last_name: "Estaban",
        address: "2335 Independence La.",
        city: "Waunakee",
        telephone: "6085555487",
        pets: &[
            pet("Lucky", (2010, 6, 24), "dog"),
            pet("Sly", (2012, 6, 8), "cat"),
        ],
    },
];

/// Counts of what [`seed_demo_data`] stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub pet_types: usize,
    pub owners: usize,
    pub pets: usize,
    pub vets: usize,
}

/// Populate empty repositories with the demo clinic
pub async fn seed_demo_data(
    pet_types: &dyn Repository<PetType>,
    owners: &dyn OwnerRepository,
    vets: &dyn VetRepository,
) -> Result<SeedSummary, RepositoryError> {
    let mut summary = SeedSummary::default();

    let mut types_by_name = HashMap::new();
    for name in PET_TYPES {
        let saved = pet_types.save(PetType::new(name)).await?;
        types_by_name.insert(name, saved);
        summary.pet_types += 1;
    }

    for seed in &OWNERS {
        let mut owner = Owner::new();
        owner.set_first_name(seed.first_name);
        owner.set_last_name(seed.last_name);
        owner.set_address(seed.address);
        owner.set_city(seed.city);
        owner.set_telephone(seed.telephone);

        for seed_pet in seed.pets {
            let mut pet = Pet::new(seed_pet.name);
            let (year, month, day) = seed_pet.born;
            if let Some(born) = NaiveDate::from_ymd_opt(year, month, day) {
                pet.set_birth_date(born);
            }
            if let Some(pet_type) = types_by_name.get(seed_pet.pet_type) {
                pet.set_pet_type(pet_type.clone());
            }
            owner.add_pet(pet);
        }

        let saved = owners.save(owner).await?;
        summary.owners += 1;
        summary.pets += saved.pets().len();
    }

    for (first_name, last_name, specialties) in VETS {
        let mut vet = Vet::new(first_name, last_name);
        for name in specialties {
            vet.add_specialty(Specialty::new(*name));
        }
        vets.save(vet).await?;
        summary.vets += 1;
    }

    info!(
        pet_types = summary.pet_types,
        owners = summary.owners,
        pets = summary.pets,
        vets = summary.vets,
        "Seeded demo clinic data"
    );
    Ok(summary)
}
