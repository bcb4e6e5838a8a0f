//! # Entity Store Demo
//!
//! Walks through the core:
//! 1.  Encoding a [`Person`] and an [`Employee`].
//! 2.  Seeding an [`InMemoryStore`].
//! 3.  Looking users up through [`UserService`], hit and miss.

use entity_store::framework::{codec, InMemoryStore};
use entity_store::lifecycle::setup_tracing;
use entity_store::model::{Address, Employee, Person, User, UserId};
use entity_store::user_service::UserService;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting entity store demo");

    let span = tracing::info_span!("encoding");
    async {
        let jane = Person::new("Jane", 25, 0.0, "Data Scientist");
        let encoded = codec::encode_to_string(&jane)?;
        info!(%encoded, "Person");

        let black = Employee::new("Black", 30, Address::new("123 Main St", "Hanoi", "Vietnam"))
            .with_work_address(Address::new("456 Work Ave", "Ho Chi Minh", "Vietnam"));
        let encoded = codec::encode(&black)?;
        let decoded: Employee = codec::decode(&encoded)?;
        info!(
            home = %decoded.home_address.city,
            work = decoded.work_address.as_ref().map(|a| a.city.as_str()),
            "Employee round trip"
        );
        Ok::<_, entity_store::framework::CodecError>(())
    }
    .instrument(span)
    .await?;

    let service = UserService::new(InMemoryStore::seeded([User::new(1, "John")]));

    let span = tracing::info_span!("lookup");
    async {
        for id in [UserId(1), UserId(2)] {
            match service.get_user(id).await {
                Ok(user) => info!(%id, first = %user.first, "User found"),
                Err(e) => error!(error = %e, "Lookup failed"),
            }
        }
    }
    .instrument(span)
    .await;

    info!("Demo completed");
    Ok(())
}
