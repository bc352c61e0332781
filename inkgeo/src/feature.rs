//! GeoJSON output of a conversion.

use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};

use crate::converter::{Conversion, NamedGeometry};
use crate::error::InkGeoError;

impl From<&NamedGeometry> for Feature {
    fn from(named: &NamedGeometry) -> Self {
        let mut properties = JsonObject::new();
        properties.insert("id".to_string(), JsonValue::from(named.id.clone()));

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&named.geometry)),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl From<&Conversion> for FeatureCollection {
    fn from(conversion: &Conversion) -> Self {
        FeatureCollection {
            bbox: None,
            features: conversion.groups.iter().map(Feature::from).collect(),
            foreign_members: None,
        }
    }
}

impl Conversion {
    /// Serializes the geometries as a GeoJSON feature collection. Every feature has the identifier in its `id`
    /// property.
    pub fn to_geojson(&self) -> Result<String, InkGeoError> {
        Ok(serde_json::to_string(&FeatureCollection::from(self))?)
    }
}
