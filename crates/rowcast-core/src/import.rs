// SPDX-FileCopyrightText: 2026 Rowcast Contributors
// SPDX-License-Identifier: MIT

//! The import object: fluent configuration plus the conversion engine.
//!
//! [`ImportObject`] wraps one field mapping and exposes the terminal
//! [`create_object`](ImportObject::create_object). Configuration happens
//! through the second view, [`ConfiguredImportObject`], whose methods all
//! consume and return the view so calls chain without hidden aliasing:
//!
//! ```rust,ignore
//! let person: Person = table_row
//!     .as_import_object()
//!     .with_configuration()
//!     .with_required_field(["name"])
//!     .with_property_alias(PersonProperties::AGE, "years")
//!     .with_default(PersonProperties::CITY, "Budapest".to_owned())
//!     .create_object()?;
//! ```
//!
//! # Conversion algorithm
//!
//! 1. A pending configuration error (duplicate alias) fails the call.
//! 2. Required fields are checked against the mapping's keys, in
//!    registration order, before any assignment.
//! 3. The entity is instantiated through the object factory.
//! 4. Every field not in the skip set is assigned: the alias table resolves
//!    the canonical property name (absent entry means the field name is the
//!    property name), the property is looked up on the entity, and the first
//!    matching converter is applied — field-name-keyed, property-name-keyed,
//!    type-keyed, then the default provider.
//! 5. Every registered default value whose property has no satisfying key in
//!    the mapping (neither the property name nor any alias of it) is
//!    assigned. Presence is judged on the raw key set, so a field that is
//!    present but skipped still suppresses the default.
//!
//! Failures abort the whole conversion; no partial entity is returned.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::ImportError;
use crate::field::FieldParseError;
use crate::property::{CellValue, Importable, Property, PropertyRef};

type Converter = Box<dyn Fn(&str) -> CellValue>;
type DefaultConverter<T> = Box<dyn Fn(&Property<T>, &str) -> Result<CellValue, FieldParseError>>;

/// A field mapping wrapped for conversion into `T`.
///
/// Obtain one with [`ImportObject::new`], [`ImportObject::from_fields`], or
/// [`AsImportObject::as_import_object`]. Call
/// [`with_configuration`](Self::with_configuration) to customize the
/// conversion, or [`create_object`](Self::create_object) to run it with the
/// defaults.
pub struct ImportObject<T: Importable> {
    data: HashMap<String, String>,
    config: Config<T>,
}

struct Config<T: Importable> {
    factory: Box<dyn Fn() -> T>,
    required: Vec<String>,
    skipped: HashSet<String>,
    aliases: HashMap<String, &'static str>,
    field_converters: HashMap<String, Converter>,
    property_converters: HashMap<&'static str, Converter>,
    value_converters: HashMap<TypeId, Converter>,
    default_converter: Option<DefaultConverter<T>>,
    default_values: Vec<(&'static str, Box<dyn Fn() -> CellValue>)>,
    pending_error: Option<ImportError>,
}

impl<T: Importable> Config<T> {
    fn new(factory: Box<dyn Fn() -> T>) -> Self {
        Self {
            factory,
            required: Vec::new(),
            skipped: HashSet::new(),
            aliases: HashMap::new(),
            field_converters: HashMap::new(),
            property_converters: HashMap::new(),
            value_converters: HashMap::new(),
            default_converter: None,
            default_values: Vec::new(),
            pending_error: None,
        }
    }

    /// Converter precedence: field name, property name, property type, then
    /// the default provider. The first match wins.
    fn convert(
        &self,
        field: &str,
        raw: &str,
        property: &Property<T>,
    ) -> Result<CellValue, FieldParseError> {
        if let Some(converter) = self.field_converters.get(field) {
            return Ok(converter(raw));
        }
        if let Some(converter) = self.property_converters.get(property.name()) {
            return Ok(converter(raw));
        }
        if let Some(converter) = self.value_converters.get(&property.type_id()) {
            return Ok(converter(raw));
        }
        match &self.default_converter {
            Some(provider) => provider(property, raw),
            None => property.parse_default(raw),
        }
    }
}

impl<T: Importable + Default> ImportObject<T> {
    /// Wraps an owned field mapping.
    ///
    /// The entity is instantiated with `T::default()` unless
    /// [`with_object_factory`](ConfiguredImportObject::with_object_factory)
    /// overrides the factory.
    pub fn new(data: HashMap<String, String>) -> Self {
        Self {
            data,
            config: Config::new(Box::new(T::default)),
        }
    }

    /// Wraps a field mapping given as `(name, value)` pairs.
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<T: Importable> ImportObject<T> {
    /// Switches to the configurable view.
    pub fn with_configuration(self) -> ConfiguredImportObject<T> {
        ConfiguredImportObject(self)
    }

    /// Converts the wrapped field mapping into an entity.
    ///
    /// See the [module docs](self) for the algorithm and
    /// [`ImportError`] for the failure taxonomy.
    pub fn create_object(self) -> Result<T, ImportError> {
        let Self { data, config } = self;

        if let Some(err) = config.pending_error {
            return Err(err);
        }
        for name in &config.required {
            if !data.contains_key(name) {
                return Err(ImportError::RequiredFieldMissing(name.clone()));
            }
        }

        debug!(
            entity = std::any::type_name::<T>(),
            fields = data.len(),
            "creating object from import data"
        );

        let mut entity = (config.factory)();

        for (field, raw) in &data {
            if config.skipped.contains(field) {
                continue;
            }
            let property_name = config
                .aliases
                .get(field)
                .copied()
                .unwrap_or(field.as_str());
            let property = T::property(property_name)
                .ok_or_else(|| ImportError::UnknownProperty(property_name.to_owned()))?;

            let conversion_failure = |source| ImportError::ConversionFailure {
                field: field.clone(),
                value: raw.clone(),
                target: property.type_name(),
                source,
            };
            let value = config.convert(field, raw, property).map_err(conversion_failure)?;
            property
                .assign(&mut entity, value)
                .map_err(conversion_failure)?;
            trace!(field = %field, property = property_name, "field assigned");
        }

        for &(property_name, ref provider) in &config.default_values {
            let satisfied = data.keys().any(|key| {
                key == property_name
                    || config
                        .aliases
                        .get(key)
                        .is_some_and(|target| *target == property_name)
            });
            if satisfied {
                continue;
            }
            let property = T::property(property_name)
                .ok_or_else(|| ImportError::UnknownProperty(property_name.to_owned()))?;
            property
                .assign(&mut entity, provider())
                .map_err(|source| ImportError::ConversionFailure {
                    field: property_name.to_owned(),
                    value: String::new(),
                    target: property.type_name(),
                    source,
                })?;
            trace!(property = property_name, "default value applied");
        }

        Ok(entity)
    }
}

/// Configurable view of an [`ImportObject`].
///
/// Every method consumes and returns the view, so configuration reads as one
/// chain ending in [`create_object`](Self::create_object). Nothing is
/// validated eagerly beyond argument shape; configuration errors surface
/// from `create_object`.
pub struct ConfiguredImportObject<T: Importable>(ImportObject<T>);

impl<T: Importable> ConfiguredImportObject<T> {
    /// Finishes configuring and runs the conversion.
    pub fn create_object(self) -> Result<T, ImportError> {
        self.0.create_object()
    }

    /// Overrides the factory that produces the initial entity instance.
    pub fn with_object_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.0.config.factory = Box::new(factory);
        self
    }

    /// Requires the named fields to be present in the import data.
    ///
    /// The check runs before any assignment; the first registered name
    /// absent from the mapping's keys aborts the conversion with
    /// [`ImportError::RequiredFieldMissing`].
    pub fn with_required_field<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.config.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Requires the field named after the given property.
    pub fn with_required_property<V>(self, property: PropertyRef<T, V>) -> Self {
        self.with_required_field([property.name()])
    }

    /// Excludes the named fields from the per-field assignment pass.
    ///
    /// A skipped field is never assigned to any property, but it still
    /// counts as present when default-value suppression is decided.
    pub fn with_skipped_field<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.config.skipped.extend(names.into_iter().map(Into::into));
        self
    }

    /// Registers an alias in the import data for the given property.
    ///
    /// A property may have any number of aliases; an alias names at most one
    /// property. Re-registering an alias for a different property is a
    /// configuration error, surfaced from
    /// [`create_object`](Self::create_object) as
    /// [`ImportError::DuplicateAlias`].
    pub fn with_property_alias<V>(
        mut self,
        property: PropertyRef<T, V>,
        alias: impl Into<String>,
    ) -> Self {
        let alias = alias.into();
        match self.0.config.aliases.get(&alias) {
            Some(existing) if *existing != property.name() => {
                if self.0.config.pending_error.is_none() {
                    self.0.config.pending_error = Some(ImportError::DuplicateAlias(alias));
                }
            }
            _ => {
                self.0.config.aliases.insert(alias, property.name());
            }
        }
        self
    }

    /// Registers several aliases for the given property at once.
    pub fn with_property_aliases<V, I, S>(mut self, property: PropertyRef<T, V>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            self = self.with_property_alias(property, alias);
        }
        self
    }

    /// Registers a converter keyed by the literal field name.
    ///
    /// Field converters have the highest precedence. The output type is
    /// checked against the target property's declared type at assignment.
    pub fn with_field_value_converter<V, F>(mut self, name: impl Into<String>, converter: F) -> Self
    where
        V: 'static,
        F: Fn(&str) -> V + 'static,
    {
        self.0
            .config
            .field_converters
            .insert(name.into(), erase(converter));
        self
    }

    /// Registers a converter keyed by the given property's canonical name.
    ///
    /// Applies to the property's own field and to all of its aliases, unless
    /// a field converter shadows it.
    pub fn with_property_value_converter<V, F>(
        mut self,
        property: PropertyRef<T, V>,
        converter: F,
    ) -> Self
    where
        V: 'static,
        F: Fn(&str) -> V + 'static,
    {
        self.0
            .config
            .property_converters
            .insert(property.name(), erase(converter));
        self
    }

    /// Registers a converter for every property of exactly type `V` that has
    /// no field or property converter.
    pub fn with_value_converter<V, F>(mut self, converter: F) -> Self
    where
        V: 'static,
        F: Fn(&str) -> V + 'static,
    {
        self.0
            .config
            .value_converters
            .insert(TypeId::of::<V>(), erase(converter));
        self
    }

    /// Replaces the fallback conversion used when no converter is registered
    /// for the field, the property, or the type.
    ///
    /// The provider receives the target [`Property`], whose
    /// [`is`](Property::is) and [`parse_default`](Property::parse_default)
    /// let it special-case some types and delegate the rest:
    ///
    /// ```rust,ignore
    /// .with_default_converter(|property, raw| {
    ///     if property.is::<u32>() {
    ///         u32::from_field(raw.trim()).map(|value| Box::new(value) as CellValue)
    ///     } else {
    ///         property.parse_default(raw)
    ///     }
    /// })
    /// ```
    pub fn with_default_converter<P>(mut self, provider: P) -> Self
    where
        P: Fn(&Property<T>, &str) -> Result<CellValue, FieldParseError> + 'static,
    {
        self.0.config.default_converter = Some(Box::new(provider));
        self
    }

    /// Registers a value provider invoked when neither the property's own
    /// name nor any of its aliases appears among the import data's keys.
    ///
    /// Registering a second provider for the same property replaces the
    /// first.
    pub fn with_default_value<V, F>(mut self, property: PropertyRef<T, V>, provider: F) -> Self
    where
        V: 'static,
        F: Fn() -> V + 'static,
    {
        let boxed: Box<dyn Fn() -> CellValue> =
            Box::new(move || -> CellValue { Box::new(provider()) });
        let slot = self
            .0
            .config
            .default_values
            .iter_mut()
            .find(|(name, _)| *name == property.name());
        match slot {
            Some((_, existing)) => *existing = boxed,
            None => self.0.config.default_values.push((property.name(), boxed)),
        }
        self
    }

    /// Shorthand for [`with_default_value`](Self::with_default_value) with a
    /// cloned constant.
    pub fn with_default<V>(self, property: PropertyRef<T, V>, value: V) -> Self
    where
        V: Clone + 'static,
    {
        self.with_default_value(property, move || value.clone())
    }
}

fn erase<V, F>(converter: F) -> Converter
where
    V: 'static,
    F: Fn(&str) -> V + 'static,
{
    Box::new(move |raw: &str| -> CellValue { Box::new(converter(raw)) })
}

/// Extension for wrapping a field mapping where it already lives.
pub trait AsImportObject {
    /// Creates a conversion object for this mapping; the data is copied.
    fn as_import_object<T: Importable + Default>(&self) -> ImportObject<T>;
}

impl AsImportObject for HashMap<String, String> {
    fn as_import_object<T: Importable + Default>(&self) -> ImportObject<T> {
        ImportObject::new(self.clone())
    }
}
