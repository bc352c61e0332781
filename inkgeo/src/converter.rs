//! The conversion pipeline.
//!
//! Every shape element is assembled into rings and projected independently. Rings are then gathered by the element
//! identifier and every group is nested into polygons, repaired and merged into one geometry.

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use inkgeo_types::cartesian::{CartesianPoint2d, Envelope};
use inkgeo_types::geo::GeoPoint2d;
use inkgeo_types::geometry::Geom;
use inkgeo_types::impls::{Polygon, Ring};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::assemble::RingAssembler;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Reported};
use crate::error::InkGeoError;
use crate::options::ConversionOptions;
use crate::projector::Projector;
use crate::shape::{Shape, ShapeElement};
use crate::topology::{repair, union_all, unloop, ContainmentForest};

/// Geometry of one identifier, in longitude and latitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedGeometry {
    /// Identifier of the shapes the geometry was built from.
    pub id: String,
    /// The geometry.
    pub geometry: Geom<GeoPoint2d>,
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversion {
    /// Geometries in the order the identifiers first appear in the input. Identifiers that produced no polygon are
    /// omitted.
    pub groups: Vec<NamedGeometry>,
    /// Problems found on the way, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Geometry with the given identifier.
    pub fn get(&self, id: &str) -> Option<&Geom<GeoPoint2d>> {
        self.groups
            .iter()
            .find(|group| group.id == id)
            .map(|group| &group.geometry)
    }
}

/// Converts drawing shapes into geographic geometries.
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConversionOptions,
    assembler: RingAssembler,
    projector: Projector,
}

impl Converter {
    /// Creates a converter calibrated by the bounding box of the `reference` shape.
    ///
    /// Fails if the reference shape has no points or its bounding box is flat.
    pub fn new(reference: &Shape, options: ConversionOptions) -> Result<Self, InkGeoError> {
        let assembler = RingAssembler::from_options(&options);
        let envelope = reference.envelope(&assembler)?;
        log::debug!("Reference envelope: {envelope:?}");

        Self::with_envelope(envelope, options)
    }

    /// Creates a converter calibrated by the given reference envelope.
    pub fn with_envelope(
        reference: Envelope,
        options: ConversionOptions,
    ) -> Result<Self, InkGeoError> {
        Ok(Self {
            assembler: RingAssembler::from_options(&options),
            projector: Projector::new(reference, &options)?,
            options,
        })
    }

    /// Options of the converter.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Projector used to map drawing coordinates onto the globe.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Converts all elements.
    ///
    /// Elements and then groups are processed in parallel on the blocking thread pool of the current tokio runtime.
    /// The result does not depend on the order in which the tasks finish. A panicking task is reported as a
    /// [`DiagnosticKind::TaskFailed`] diagnostic and its contribution is dropped.
    ///
    /// Fails only if a task is cancelled, e.g. because the runtime is shutting down.
    pub async fn convert(&self, elements: Vec<ShapeElement>) -> Result<Conversion, InkGeoError> {
        let ids: Vec<String> = elements.iter().map(|e| e.id.clone()).collect();
        let mut diagnostics = vec![];

        let mut element_tasks = JoinSet::new();
        for (index, element) in elements.into_iter().enumerate() {
            let converter = self.clone();
            element_tasks.spawn_blocking(move || (index, converter.project_element(&element)));
        }
        let projected = join_indexed(element_tasks, ids.len()).await?;

        let mut group_index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<Ring<GeoPoint2d>>)> = vec![];
        for (id, rings) in ids.iter().zip(projected) {
            let index = *group_index.entry(id.as_str()).or_insert_with(|| {
                groups.push((id.clone(), vec![]));
                groups.len() - 1
            });

            match rings {
                Some(rings) => groups[index].1.extend(rings.unpack(&mut diagnostics)),
                None => diagnostics.push(Diagnostic::new(
                    DiagnosticKind::TaskFailed,
                    Some(id.as_str()),
                    "shape conversion panicked",
                )),
            }
        }

        let group_ids: Vec<String> = groups.iter().map(|(id, _)| id.clone()).collect();
        let mut group_tasks = JoinSet::new();
        for (index, (id, rings)) in groups.into_iter().enumerate() {
            let converter = self.clone();
            group_tasks.spawn_blocking(move || (index, converter.convert_group(&id, rings)));
        }
        let merged = join_indexed(group_tasks, group_ids.len()).await?;

        let mut named = vec![];
        for (id, geometry) in group_ids.into_iter().zip(merged) {
            match geometry {
                Some(geometry) => {
                    if let Some(geometry) = geometry.unpack(&mut diagnostics) {
                        named.push(NamedGeometry { id, geometry });
                    }
                }
                None => diagnostics.push(Diagnostic::new(
                    DiagnosticKind::TaskFailed,
                    Some(id.as_str()),
                    "group conversion panicked",
                )),
            }
        }

        Ok(Conversion {
            groups: named,
            diagnostics,
        })
    }

    /// Assembles the rings of the element and projects them.
    pub fn project_element(&self, element: &ShapeElement) -> Reported<Vec<Ring<GeoPoint2d>>> {
        log::debug!("Projecting shape of '{}'", element.id);

        let mut diagnostics = vec![];
        let rings = element.shape.rings(&self.assembler).unpack(&mut diagnostics);

        let projected = rings
            .iter()
            .map(|ring| {
                let projected = self.projector.project_ring(ring).unpack(&mut diagnostics);
                if self.options.unloop_rings() {
                    unloop(&projected)
                } else {
                    projected
                }
            })
            .collect();

        Reported::new(projected, with_shape_id(diagnostics, &element.id))
    }

    /// Builds the geometry of one group from its projected rings.
    ///
    /// Rings are nested into polygons, every polygon is repaired and all polygons are merged by union. Returns `None`
    /// if no polygon is left.
    pub fn convert_group(
        &self,
        id: &str,
        rings: Vec<Ring<GeoPoint2d>>,
    ) -> Reported<Option<Geom<GeoPoint2d>>> {
        log::info!("Processing {id}");

        let mut diagnostics = vec![];
        let rings = if self.options.deduplicate() {
            deduplicate_rings(rings)
        } else {
            rings
        };

        let mut polygons = ContainmentForest::build(rings)
            .unpack(&mut diagnostics)
            .into_polygons();
        if self.options.deduplicate() {
            polygons = deduplicate_polygons(polygons);
        }

        let repaired: Vec<Geom<GeoPoint2d>> = polygons
            .into_iter()
            .map(|polygon| repair(polygon).unpack(&mut diagnostics))
            .filter(|geom| !geom.is_empty())
            .collect();

        let geometry = match union_all(&repaired) {
            Ok(geometry) => geometry,
            Err(err) => {
                log::warn!("Failed to merge polygons of '{id}', keeping them separate: {err}");
                Geom::from_polygons(repaired.into_iter().flat_map(Geom::into_polygons).collect())
            }
        };

        let geometry = (!geometry.is_empty()).then_some(geometry);
        if geometry.is_none() {
            log::debug!("Group '{id}' has no polygons");
        }

        Reported::new(geometry, with_shape_id(diagnostics, id))
    }
}

/// Waits for all tasks and puts their results at the index they are tagged with. Slots of panicked tasks stay empty.
async fn join_indexed<T: Send + 'static>(
    mut tasks: JoinSet<(usize, T)>,
    count: usize,
) -> Result<Vec<Option<T>>, InkGeoError> {
    let mut results: Vec<Option<T>> = std::iter::repeat_with(|| None).take(count).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, value)) => results[index] = Some(value),
            Err(err) if err.is_panic() => log::debug!("Conversion task panicked: {err}"),
            Err(err) => return Err(InkGeoError::Task(err.to_string())),
        }
    }

    Ok(results)
}

fn with_shape_id(diagnostics: Vec<Diagnostic>, id: &str) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .map(|d| d.with_shape_id(id))
        .collect()
}

fn ring_key(ring: &Ring<GeoPoint2d>) -> Vec<(u64, u64)> {
    ring.points()
        .iter()
        .map(|p| (p.x().to_bits(), p.y().to_bits()))
        .collect()
}

fn deduplicate_rings(rings: Vec<Ring<GeoPoint2d>>) -> Vec<Ring<GeoPoint2d>> {
    let count = rings.len();
    let mut seen = HashSet::new();
    let unique: Vec<_> = rings
        .into_iter()
        .filter(|ring| seen.insert(ring_key(ring)))
        .collect();

    if unique.len() < count {
        log::debug!("Dropped {} duplicate rings", count - unique.len());
    }
    unique
}

fn deduplicate_polygons(polygons: Vec<Polygon<GeoPoint2d>>) -> Vec<Polygon<GeoPoint2d>> {
    let mut unique: Vec<Polygon<GeoPoint2d>> = Vec::with_capacity(polygons.len());
    for polygon in polygons {
        if !unique.contains(&polygon) {
            unique.push(polygon);
        }
    }
    unique
}
