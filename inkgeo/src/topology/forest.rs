//! Nesting of rings into shells, holes and islands.

use geo::Contains;
use geo_types::LineString;
use inkgeo_types::cartesian::{CartesianPoint2d, Winding};
use inkgeo_types::contour::CartesianContour;
use inkgeo_types::impls::{Polygon, Ring};

use crate::diagnostic::{Diagnostic, DiagnosticKind, Reported};

/// Index of a ring in a [`ContainmentForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingId(usize);

impl RingId {
    /// Position of the ring in the input sequence.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Pending,
    Visiting,
    Resolved(Option<usize>),
}

/// Rings arranged by the "smallest enclosing ring" relation.
///
/// Rings are stored in an arena in input order and the relation is a parent array, so a ring without a parent is a
/// top-level shell. A ring at odd depth is a hole of its parent, a ring at even depth starts a new polygon.
#[derive(Debug, Clone)]
pub struct ContainmentForest<P> {
    rings: Vec<Ring<P>>,
    parents: Vec<Option<usize>>,
}

impl<P> ContainmentForest<P>
where
    P: CartesianPoint2d<Num = f64> + Clone,
{
    /// Builds the forest.
    ///
    /// Ring `A` contains ring `B` if the polygon bounded by `A` contains the polygon bounded by `B`. Of two identical
    /// rings the earlier one contains the later one. The parent of a ring is its innermost container. If the
    /// containers do not reduce to a single innermost one, the candidate with the smallest area (then the lowest
    /// index) is chosen and an [`DiagnosticKind::AmbiguousContainment`] diagnostic is reported.
    pub fn build(rings: Vec<Ring<P>>) -> Reported<Self> {
        let containment = ContainmentMatrix::new(&rings);
        let mut resolver = Resolver {
            rings: &rings,
            containment: &containment,
            slots: vec![Slot::Pending; rings.len()],
            diagnostics: vec![],
        };

        let parents = (0..rings.len()).map(|i| resolver.resolve(i)).collect();
        let diagnostics = resolver.diagnostics;

        Reported::new(Self { rings, parents }, diagnostics)
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Returns true if there are no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Ids of all rings in input order.
    pub fn ids(&self) -> impl Iterator<Item = RingId> {
        (0..self.rings.len()).map(RingId)
    }

    /// Ring with the given id.
    pub fn ring(&self, id: RingId) -> &Ring<P> {
        &self.rings[id.0]
    }

    /// Innermost ring containing the given one.
    pub fn parent(&self, id: RingId) -> Option<RingId> {
        self.parents[id.0].map(RingId)
    }

    /// Number of ancestors of the ring.
    pub fn depth(&self, id: RingId) -> usize {
        std::iter::successors(self.parent(id), |p| self.parent(*p)).count()
    }

    /// Assembles polygons: every ring at even depth becomes a shell with its children as holes.
    ///
    /// Shells are wound counterclockwise and holes clockwise. Polygons are ordered by a depth-first walk starting
    /// from top-level rings in input order.
    pub fn into_polygons(self) -> Vec<Polygon<P>> {
        let mut children = vec![vec![]; self.rings.len()];
        let mut roots = vec![];
        for (i, parent) in self.parents.iter().enumerate() {
            match parent {
                Some(parent) => children[*parent].push(i),
                None => roots.push(i),
            }
        }

        let mut polygons = vec![];
        let mut shells = roots;
        shells.reverse();
        while let Some(shell) = shells.pop() {
            let holes = &children[shell];
            polygons.push(Polygon::new(
                oriented(&self.rings[shell], Winding::CounterClockwise),
                holes
                    .iter()
                    .map(|h| oriented(&self.rings[*h], Winding::Clockwise))
                    .collect(),
            ));

            for hole in holes.iter().rev() {
                shells.extend(children[*hole].iter().rev());
            }
        }

        polygons
    }
}

fn oriented<P>(ring: &Ring<P>, winding: Winding) -> Ring<P>
where
    P: CartesianPoint2d<Num = f64> + Clone,
{
    if ring.winding() == winding {
        ring.clone()
    } else {
        ring.reversed()
    }
}

/// `contains[i][j]` is true if ring `i` contains ring `j`. Never true for both directions.
struct ContainmentMatrix {
    contains: Vec<Vec<bool>>,
}

impl ContainmentMatrix {
    fn new<P: CartesianPoint2d<Num = f64>>(rings: &[Ring<P>]) -> Self {
        let envelopes: Vec<_> = rings.iter().map(|r| r.envelope()).collect();
        let polygons: Vec<geo_types::Polygon<f64>> = rings
            .iter()
            .map(|r| geo_types::Polygon::new(LineString::from(r), vec![]))
            .collect();

        let mut contains = vec![vec![false; rings.len()]; rings.len()];
        for i in 0..rings.len() {
            for j in 0..rings.len() {
                let candidate = match (&envelopes[i], &envelopes[j]) {
                    (Some(a), Some(b)) => i != j && a.covers(b),
                    _ => false,
                };
                contains[i][j] = candidate && polygons[i].contains(&polygons[j]);
            }
        }

        for i in 0..rings.len() {
            for j in i + 1..rings.len() {
                if contains[i][j] && contains[j][i] {
                    contains[j][i] = false;
                }
            }
        }

        Self { contains }
    }

    fn containers(&self, ring: usize) -> Vec<usize> {
        (0..self.contains.len())
            .filter(|c| self.contains[*c][ring])
            .collect()
    }
}

struct Resolver<'a, P> {
    rings: &'a [Ring<P>],
    containment: &'a ContainmentMatrix,
    slots: Vec<Slot>,
    diagnostics: Vec<Diagnostic>,
}

impl<P: CartesianPoint2d<Num = f64>> Resolver<'_, P> {
    fn resolve(&mut self, ring: usize) -> Option<usize> {
        match self.slots[ring] {
            Slot::Resolved(parent) => return parent,
            Slot::Visiting => {
                log::debug!("Containment cycle through ring {ring}");
                return None;
            }
            Slot::Pending => {}
        }

        self.slots[ring] = Slot::Visiting;
        let candidates = self.containment.containers(ring);
        let parent = match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            _ => Some(self.innermost(ring, &candidates)),
        };
        self.slots[ring] = Slot::Resolved(parent);

        log::debug!("Ring {ring} has parent {parent:?}");
        parent
    }

    /// Containment is transitive, so the containers of a candidate are a subset of the candidates and its parent
    /// within the candidate set is its global parent.
    fn innermost(&mut self, ring: usize, candidates: &[usize]) -> usize {
        let candidate_parents: Vec<Option<usize>> =
            candidates.iter().map(|c| self.resolve(*c)).collect();
        let minimal: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|c| !candidate_parents.contains(&Some(*c)))
            .collect();

        if let [single] = minimal.as_slice() {
            return *single;
        }

        let pool = if minimal.is_empty() {
            candidates
        } else {
            &minimal[..]
        };
        let area = |i: usize| self.rings[i].area_signed().abs();
        let chosen = pool
            .iter()
            .copied()
            .min_by(|a, b| area(*a).total_cmp(&area(*b)).then(a.cmp(b)))
            .unwrap_or(candidates[0]);

        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::AmbiguousContainment,
            None,
            format!(
                "ring {ring} is contained in {} rings without a single innermost one, ring {chosen} is used as parent",
                pool.len()
            ),
        ));

        chosen
    }
}

#[cfg(test)]
mod tests {
    use inkgeo_types::cartesian::Point2d;
    use inkgeo_types::contour::Contour;

    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Ring<Point2d> {
        Ring::new(vec![
            Point2d::new(x_min, y_min),
            Point2d::new(x_max, y_min),
            Point2d::new(x_max, y_max),
            Point2d::new(x_min, y_max),
        ])
        .unwrap()
    }

    fn square(min: f64, max: f64) -> Ring<Point2d> {
        rect(min, min, max, max)
    }

    #[test]
    fn concentric_squares() {
        let reported = ContainmentForest::build(vec![
            square(0.0, 10.0),
            square(2.0, 8.0),
            square(4.0, 6.0),
        ]);
        assert!(reported.is_clean());

        let forest = reported.value;
        let ids: Vec<_> = forest.ids().collect();
        assert_eq!(forest.parent(ids[0]), None);
        assert_eq!(forest.parent(ids[1]), Some(ids[0]));
        assert_eq!(forest.parent(ids[2]), Some(ids[1]));
        assert_eq!(forest.depth(ids[2]), 2);

        let polygons = forest.into_polygons();
        assert_eq!(polygons.len(), 2);

        assert_eq!(polygons[0].outer_contour.area_signed(), 100.0);
        assert_eq!(polygons[0].inner_contours.len(), 1);
        assert_eq!(polygons[0].inner_contours[0].area_signed(), -36.0);

        assert_eq!(polygons[1].outer_contour.area_signed(), 4.0);
        assert!(polygons[1].inner_contours.is_empty());
    }

    #[test]
    fn input_order_does_not_matter() {
        let forest = ContainmentForest::build(vec![
            square(4.0, 6.0),
            square(0.0, 10.0),
            square(2.0, 8.0),
        ])
        .value;

        let ids: Vec<_> = forest.ids().collect();
        assert_eq!(forest.parent(ids[0]), Some(ids[2]));
        assert_eq!(forest.parent(ids[2]), Some(ids[1]));

        let polygons = forest.into_polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].outer_contour.area_signed(), 100.0);
        assert_eq!(polygons[1].outer_contour.area_signed(), 4.0);
    }

    #[test]
    fn separate_shells_with_holes() {
        let forest = ContainmentForest::build(vec![
            square(0.0, 10.0),
            square(20.0, 30.0),
            square(22.0, 24.0),
            square(2.0, 4.0),
            square(6.0, 8.0),
        ])
        .value;

        let polygons = forest.into_polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].inner_contours.len(), 2);
        assert_eq!(polygons[1].inner_contours.len(), 1);
        assert_eq!(polygons[1].outer_contour.area_signed(), 100.0);
    }

    #[test]
    fn shells_are_counterclockwise_and_holes_clockwise() {
        let forest =
            ContainmentForest::build(vec![square(0.0, 10.0).reversed(), square(2.0, 8.0)]).value;
        let polygon = &forest.into_polygons()[0];

        assert_eq!(polygon.outer_contour.winding(), Winding::CounterClockwise);
        assert_eq!(polygon.inner_contours[0].winding(), Winding::Clockwise);
        assert_eq!(polygon.outer_contour.iter_points().count(), 4);
    }

    #[test]
    fn ambiguous_containment_prefers_smaller_candidate() {
        // two overlapping rings both contain the small one, none contains the other
        let reported = ContainmentForest::build(vec![
            rect(5.0, 0.0, 16.0, 10.0),
            rect(0.0, 0.0, 10.0, 10.0),
            rect(6.0, 2.0, 8.0, 4.0),
        ]);

        assert_eq!(reported.diagnostics.len(), 1);
        assert_eq!(
            reported.diagnostics[0].kind(),
            DiagnosticKind::AmbiguousContainment
        );

        let forest = reported.value;
        let ids: Vec<_> = forest.ids().collect();
        assert_eq!(forest.parent(ids[2]), Some(ids[1]));
        assert_eq!(forest.parent(ids[0]), None);
        assert_eq!(forest.parent(ids[1]), None);
    }

    #[test]
    fn identical_rings() {
        let forest = ContainmentForest::build(vec![square(0.0, 10.0), square(0.0, 10.0)]).value;
        let ids: Vec<_> = forest.ids().collect();

        assert_eq!(forest.parent(ids[0]), None);
        assert_eq!(forest.parent(ids[1]), Some(ids[0]));
    }

    #[test]
    fn empty_forest() {
        let forest = ContainmentForest::<Point2d>::build(vec![]).value;
        assert!(forest.is_empty());
        assert!(forest.into_polygons().is_empty());
    }
}
