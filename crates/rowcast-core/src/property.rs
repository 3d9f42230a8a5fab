// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! Property descriptors and typed selectors.
//!
//! An [`Importable`] entity exposes a static table of [`Property`]
//! descriptors, one per settable property. Each descriptor knows the
//! canonical property name, the declared type (for type-keyed converter
//! lookup and diagnostics), a type-checked setter, and the default
//! string-parse hook for the declared type.
//!
//! The table is normally generated by `#[derive(Importable)]`, together with
//! a `{Entity}Properties` companion holding one [`PropertyRef`] constant per
//! property. The constants are what make alias, converter, and default-value
//! registration compile-time-checked: a selector names a real property and
//! carries its declared type.
//!
//! Hand-written implementations follow the same contract:
//!
//! ```rust
//! use std::any::TypeId;
//!
//! use rowcast_core::{CellValue, FieldParseError, FromField, Importable, Property, PropertyRef};
//!
//! #[derive(Default)]
//! struct Sample {
//!     label: String,
//! }
//!
//! fn set_label(entity: &mut Sample, value: CellValue) -> Result<(), CellValue> {
//!     value.downcast::<String>().map(|value| entity.label = *value)
//! }
//!
//! fn parse_label(raw: &str) -> Result<CellValue, FieldParseError> {
//!     <String as FromField>::from_field(raw).map(|value| Box::new(value) as CellValue)
//! }
//!
//! impl Importable for Sample {
//!     const PROPERTIES: &'static [Property<Self>] = &[Property::new(
//!         "label",
//!         "String",
//!         TypeId::of::<String>,
//!         set_label,
//!         parse_label,
//!     )];
//! }
//!
//! const LABEL: PropertyRef<Sample, String> = PropertyRef::new("label");
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use crate::field::FieldParseError;

/// Type-erased property value in transit between a converter and a setter.
pub type CellValue = Box<dyn Any>;

/// Descriptor for one settable property of an entity.
pub struct Property<T> {
    name: &'static str,
    type_name: &'static str,
    type_id: fn() -> TypeId,
    set: fn(&mut T, CellValue) -> Result<(), CellValue>,
    parse: fn(&str) -> Result<CellValue, FieldParseError>,
}

impl<T> Property<T> {
    /// Builds a descriptor. Called by generated code; hand-written
    /// [`Importable`] implementations use it the same way.
    pub const fn new(
        name: &'static str,
        type_name: &'static str,
        type_id: fn() -> TypeId,
        set: fn(&mut T, CellValue) -> Result<(), CellValue>,
        parse: fn(&str) -> Result<CellValue, FieldParseError>,
    ) -> Self {
        Self {
            name,
            type_name,
            type_id,
            set,
            parse,
        }
    }

    /// Canonical property name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Display name of the declared property type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the declared property type.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Whether the declared property type is `V`.
    pub fn is<V: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<V>()
    }

    /// Default conversion for the declared type — its
    /// [`FromField`](crate::FromField) implementation.
    pub fn parse_default(&self, raw: &str) -> Result<CellValue, FieldParseError> {
        (self.parse)(raw)
    }

    /// Assigns a converted value, rejecting values of the wrong type.
    pub fn assign(&self, entity: &mut T, value: CellValue) -> Result<(), FieldParseError> {
        (self.set)(entity, value).map_err(|_| FieldParseError::TypeMismatch)
    }
}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Entity type constructible from a field mapping.
///
/// Normally derived; see the module docs for the hand-written form.
pub trait Importable: Sized + 'static {
    /// Property table: one descriptor per settable property.
    const PROPERTIES: &'static [Property<Self>];

    /// Looks up a property by canonical name.
    fn property(name: &str) -> Option<&'static Property<Self>> {
        Self::PROPERTIES
            .iter()
            .find(|property| property.name() == name)
    }
}

/// Compile-time-checked reference to property `V` of entity `E`.
///
/// Obtained from the derive-generated `{Entity}Properties` constants. The
/// type parameters tie every registration to the entity and to the
/// property's declared type, so a converter or default value of the wrong
/// type fails to compile instead of at conversion time.
pub struct PropertyRef<E, V> {
    name: &'static str,
    _marker: PhantomData<fn(&mut E, V)>,
}

impl<E, V> PropertyRef<E, V> {
    /// Builds a selector for the property with the given canonical name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Canonical name of the selected property.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, V> Clone for PropertyRef<E, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, V> Copy for PropertyRef<E, V> {}

impl<E, V> fmt::Debug for PropertyRef<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyRef").field(&self.name).finish()
    }
}
