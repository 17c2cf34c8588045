//! Response envelopes.
//!
//! Every successful response from the Lago API wraps its payload under a single key:
//! `{"customer": {...}}` for one entity, `{"customers": [...], "meta": {...}}` for a page of them.
//! The wrapping keys are attached to the entity type through the [`Resource`](crate::envelope::Resource) trait.

use serde::{
    de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData};

/// An entity returned by the Lago API, along with the keys wrapping it in responses.
pub trait Resource: DeserializeOwned {
    /// Key wrapping a single entity, e.g. `customer`.
    const KEY: &'static str;
    /// Key wrapping a list of entities, e.g. `customers`.
    const LIST_KEY: &'static str;
}

/// Implements [`Resource`](crate::envelope::Resource) for a model type.
macro_rules! resource {
    ($ty:ty, $key:literal, $list_key:literal) => {
        impl $crate::envelope::Resource for $ty {
            const KEY: &'static str = $key;
            const LIST_KEY: &'static str = $list_key;
        }
    };
}
pub(crate) use resource;

/// Pagination metadata attached to every list response.
///
/// `next_page` and `prev_page` are `0` when there is no such page.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_page: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub next_page: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub prev_page: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_pages: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_count: u64,
}

impl Metadata {
    /// Returns `true` if there is a page after the current one.
    pub fn has_next_page(&self) -> bool {
        self.next_page != 0
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single entity wrapped under [`Resource::KEY`](crate::envelope::Resource::KEY).
#[derive(Debug, Clone, PartialEq)]
pub struct Single<T>(pub T);

impl<T> Single<T> {
    /// Unwraps the entity.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// A page of entities wrapped under [`Resource::LIST_KEY`](crate::envelope::Resource::LIST_KEY),
/// together with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Metadata,
}

/// A plain list wrapped under [`Resource::LIST_KEY`](crate::envelope::Resource::LIST_KEY), without pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T>(pub Vec<T>);

impl<T> List<T> {
    /// Unwraps the entities.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: Resource> Deserialize<'de> for Single<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SingleVisitor<T>(PhantomData<T>);

        impl<'de, T: Resource> Visitor<'de> for SingleVisitor<T> {
            type Value = Single<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an object wrapping `{}`", T::KEY)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut value = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == T::KEY {
                        value = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                value
                    .map(Single)
                    .ok_or_else(|| de::Error::missing_field(T::KEY))
            }
        }

        deserializer.deserialize_map(SingleVisitor(PhantomData))
    }
}

impl<'de, T: Resource> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PageVisitor<T>(PhantomData<T>);

        impl<'de, T: Resource> Visitor<'de> for PageVisitor<T> {
            type Value = Page<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an object wrapping `{}` and `meta`", T::LIST_KEY)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut items = None;
                let mut meta = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == T::LIST_KEY {
                        items = Some(map.next_value()?);
                    } else if key == "meta" {
                        meta = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(Page {
                    items: items.ok_or_else(|| de::Error::missing_field(T::LIST_KEY))?,
                    meta: meta.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(PageVisitor(PhantomData))
    }
}

impl<'de, T: Resource> Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let page = Page::<T>::deserialize(deserializer)?;
        Ok(List(page.items))
    }
}

/// Request body wrapping an input under a single key, e.g. `{"customer": {...}}`.
#[derive(Debug)]
pub(crate) struct Wrapped<'a, T: ?Sized> {
    key: &'static str,
    value: &'a T,
}

impl<'a, T: ?Sized> Wrapped<'a, T> {
    pub(crate) fn new(key: &'static str, value: &'a T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize + ?Sized> Serialize for Wrapped<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}
