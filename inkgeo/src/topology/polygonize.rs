//! Planar subdivision of a self-intersecting line into simple faces.
//!
//! The line is noded at every intersection, turned into a half-edge graph, and faces are traced by always taking
//! the next edge counterclockwise around each vertex:
//! 1. dangling edges (filaments) are pruned;
//! 2. half-edges are linked by sorting outgoing edges by angle;
//! 3. face walks are traced, and edges seen from both sides in one walk (cut edges) are removed, repeating until no
//!    cut edges are left;
//! 4. walks with clockwise orientation bound faces, the counterclockwise ones are outer boundaries of components.

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use inkgeo_types::cartesian::{CartesianPoint2d, Envelope, NewCartesianPoint2d, Point2d};
use inkgeo_types::impls::Ring;
use inkgeo_types::segment::{Segment, SegmentIntersection};
use inkgeo_types::sweep::overlapping_pairs;

#[derive(Debug, Clone)]
struct HalfEdge {
    start: usize,
    end: usize,
    next: Option<usize>,
    removed: bool,
}

/// Half-edges are stored in pairs, so the twin of `i` is `i ^ 1`.
fn twin(edge: usize) -> usize {
    edge ^ 1
}

#[derive(Debug, Default)]
struct PlanarGraph {
    vertices: Vec<Point2d>,
    edges: Vec<HalfEdge>,
}

/// Returns the simple faces enclosed by the line, as counterclockwise rings.
///
/// The line is taken as given: to polygonize a ring pass all its points including the closing one.
pub fn polygonize<P>(line: &[P]) -> Vec<Ring<P>>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    let points: Vec<Point2d> = line.iter().map(Point2d::from_point).collect();
    let mut graph = PlanarGraph::from_line(&points);

    let faces = loop {
        graph.prune_filaments();
        graph.link();
        let walks = graph.trace_walks();

        let cut_edges: Vec<usize> = walks
            .iter()
            .flat_map(|walk| {
                let in_walk: HashSet<usize> = walk.iter().copied().collect();
                walk.iter()
                    .copied()
                    .filter(|e| in_walk.contains(&twin(*e)))
                    .collect::<Vec<_>>()
            })
            .collect();

        if cut_edges.is_empty() {
            break walks;
        }

        log::debug!("Removing {} cut half-edges", cut_edges.len());
        for edge in cut_edges {
            graph.edges[edge].removed = true;
        }
    };

    faces
        .iter()
        .filter_map(|walk| graph.face_ring(walk))
        .collect()
}

impl PlanarGraph {
    fn from_line(points: &[Point2d]) -> Self {
        let segments: Vec<Segment<Point2d>> = points
            .windows(2)
            .map(|w| Segment(&w[0], &w[1]))
            .filter(|s| !s.is_degenerate())
            .collect();

        let mut splits: Vec<Vec<Point2d>> = segments.iter().map(|s| vec![*s.0, *s.1]).collect();

        let envelopes: Vec<Envelope> = segments
            .iter()
            .map(|s| Envelope::new(s.0.x(), s.1.x(), s.0.y(), s.1.y()))
            .collect();
        for (i, j) in overlapping_pairs(&envelopes) {
            match segments[i].intersection::<Point2d>(&segments[j]) {
                Some(SegmentIntersection::Point(p)) => {
                    splits[i].push(p);
                    splits[j].push(p);
                }
                Some(SegmentIntersection::Overlap(a, b)) => {
                    splits[i].extend([a, b]);
                    splits[j].extend([a, b]);
                }
                None => {}
            }
        }

        let mut graph = Self::default();
        let mut vertex_ids: HashMap<(u64, u64), usize> = HashMap::new();
        let mut seen_edges: HashSet<(usize, usize)> = HashSet::new();

        for (segment, mut split) in segments.iter().zip(splits) {
            let origin = *segment.0;
            split.sort_by(|a, b| a.distance_sq(&origin).total_cmp(&b.distance_sq(&origin)));
            split.dedup();

            for pair in split.windows(2) {
                let a = graph.vertex_id(pair[0], &mut vertex_ids);
                let b = graph.vertex_id(pair[1], &mut vertex_ids);
                if a != b && seen_edges.insert((a.min(b), a.max(b))) {
                    graph.add_edge(a, b);
                }
            }
        }

        graph
    }

    fn vertex_id(&mut self, point: Point2d, ids: &mut HashMap<(u64, u64), usize>) -> usize {
        // adding 0.0 turns -0.0 into 0.0
        let key = ((point.x() + 0.0).to_bits(), (point.y() + 0.0).to_bits());
        *ids.entry(key).or_insert_with(|| {
            self.vertices.push(point);
            self.vertices.len() - 1
        })
    }

    fn add_edge(&mut self, a: usize, b: usize) {
        for (start, end) in [(a, b), (b, a)] {
            self.edges.push(HalfEdge {
                start,
                end,
                next: None,
                removed: false,
            });
        }
    }

    fn outgoing(&self) -> Vec<Vec<usize>> {
        let mut outgoing = vec![vec![]; self.vertices.len()];
        for (i, edge) in self.edges.iter().enumerate() {
            if !edge.removed {
                outgoing[edge.start].push(i);
            }
        }
        outgoing
    }

    /// Removes edges ending in a vertex of degree 1 until there are none.
    fn prune_filaments(&mut self) {
        let outgoing = self.outgoing();
        let mut degree: Vec<usize> = outgoing.iter().map(Vec::len).collect();
        let mut queue: Vec<usize> = (0..degree.len()).filter(|v| degree[*v] == 1).collect();

        while let Some(vertex) = queue.pop() {
            if degree[vertex] != 1 {
                continue;
            }

            let Some(&edge) = outgoing[vertex].iter().find(|e| !self.edges[**e].removed) else {
                continue;
            };
            self.edges[edge].removed = true;
            self.edges[twin(edge)].removed = true;

            let other = self.edges[edge].end;
            degree[vertex] -= 1;
            degree[other] -= 1;
            if degree[other] == 1 {
                queue.push(other);
            }
        }
    }

    /// Sets `next` of every incoming half-edge to the next outgoing half-edge counterclockwise.
    fn link(&mut self) {
        for (vertex, mut outgoing) in self.outgoing().into_iter().enumerate() {
            let origin = self.vertices[vertex];
            outgoing.sort_by(|a, b| {
                let angle = |e: usize| {
                    let end = self.vertices[self.edges[e].end];
                    (end.y() - origin.y()).atan2(end.x() - origin.x())
                };
                angle(*a).total_cmp(&angle(*b))
            });

            for (i, &edge) in outgoing.iter().enumerate() {
                let next = outgoing[(i + 1) % outgoing.len()];
                self.edges[twin(edge)].next = Some(next);
            }
        }
    }

    fn trace_walks(&self) -> Vec<Vec<usize>> {
        let mut used = vec![false; self.edges.len()];
        let mut walks = vec![];

        for start in 0..self.edges.len() {
            if used[start] || self.edges[start].removed {
                continue;
            }

            let mut walk = vec![];
            let mut current = start;
            loop {
                used[current] = true;
                walk.push(current);

                match self.edges[current].next {
                    Some(next) if next == start => {
                        walks.push(walk);
                        break;
                    }
                    Some(next) if !used[next] && walk.len() <= self.edges.len() => current = next,
                    _ => {
                        log::debug!("Face walk starting at half-edge {start} did not close");
                        break;
                    }
                }
            }
        }

        walks
    }

    /// Ring of a bounded face. Outer boundaries (counterclockwise walks) and zero-area walks give `None`.
    fn face_ring<P>(&self, walk: &[usize]) -> Option<Ring<P>>
    where
        P: NewCartesianPoint2d<f64> + Clone,
    {
        let points: Vec<Point2d> = walk
            .iter()
            .map(|e| self.vertices[self.edges[*e].start])
            .collect();

        let doubled_area: f64 = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| a.x() * b.y() - b.x() * a.y())
            .sum();
        if doubled_area >= 0.0 {
            return None;
        }

        Ring::new(points.iter().rev().map(|p| P::new(p.x(), p.y())).collect()).ok()
    }
}
