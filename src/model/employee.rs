use crate::framework::{Entity, Field};
use serde::{Deserialize, Serialize};

/// A postal address. Pure value type, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

impl Entity for Address {
    const NAME: &'static str = "Address";
    const FIELDS: &'static [Field] = &[
        Field::new("street"),
        Field::new("city"),
        Field::new("country"),
    ];
}

/// An employee with an owned home address and an optional work address.
///
/// `work_address` is a nullable relationship: `None` means "no work address" and
/// stays `None` through an encode/decode round trip. It never comes back as an
/// empty [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub age: i64,
    pub home_address: Address,
    #[serde(default)]
    pub work_address: Option<Address>,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: i64, home_address: Address) -> Self {
        Self {
            name: name.into(),
            age,
            home_address,
            work_address: None,
        }
    }

    pub fn with_work_address(mut self, address: Address) -> Self {
        self.work_address = Some(address);
        self
    }
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";
    const FIELDS: &'static [Field] = &[
        Field::new("name"),
        Field::new("age"),
        Field::new("home_address")
            .rename("homeAddress")
            .nested(Address::FIELDS),
        Field::new("work_address")
            .rename("workAddress")
            .omit_if_empty()
            .nested(Address::FIELDS),
    ];
}
