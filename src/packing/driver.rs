/*!
 * Packing driver.
 *
 * Breadth-first expansion over an append-only arena of boundary elements.
 * Each pending triple names three mutually tangent elements by index;
 * solving it gives a new circle which, if large enough, spawns three
 * child triples that each swap one parent for the new circle.
 */

use std::collections::VecDeque;
use itertools::Itertools;

use crate::geo_2d::*;
use crate::packing::{
    tangency,
    InternalFault,
    PackingError,
    ProcResult,
};

/// Indices of three mutually tangent elements in the working set.
pub type Triple = [usize; 3];

/// Default safety limit on the number of spawned circles.
pub const DEFAULT_MAX_CIRCLES: usize = 1_000_000;

/// A tangency element: a circle or a straight boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Circle(Circle),
    Line(Line),
}
impl Element {
    /// Short name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Circle(_) => "circle",
            Element::Line(_) => "line",
        }
    }
}

/// Which seed the working set grew from. Decides how triples are dispatched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedKind {
    /// Three boundary lines at indices 0..3.
    Triangle,
    /// Enclosing circle at index 0, two inner circles at 1 and 2.
    Gasket,
}
impl SeedKind {
    fn name(&self) -> &'static str {
        match self {
            SeedKind::Triangle => "triangle",
            SeedKind::Gasket => "gasket",
        }
    }
}

/// Solver case for one triple, resolved once from the element kinds.
enum Case<'a> {
    Incircle(&'a Line, &'a Line, &'a Line),
    Corner(&'a Line, &'a Line, &'a Circle),
    Edge(&'a Line, &'a Circle, &'a Circle),
    Soddy(&'a Circle, &'a Circle, &'a Circle),
    Enclosed(&'a Circle, &'a Circle, &'a Circle),
}
impl Case<'_> {
    fn solve(&self) -> Circle {
        match *self {
            Case::Incircle(line1, line2, line3) => tangency::incircle(line1, line2, line3),
            Case::Corner(line1, line2, circle) => tangency::corner_circle(line1, line2, circle),
            Case::Edge(line, circle1, circle2) => tangency::edge_circle(circle1, circle2, line),
            Case::Soddy(circle1, circle2, circle3) => tangency::soddy_circle(circle1, circle2, circle3),
            Case::Enclosed(outer, circle1, circle2) => tangency::enclosed_circle(outer, circle1, circle2, false),
        }
    }
}

/// Packing driver.
/// Owns the working set and the work queue for a single run.
#[derive(Debug)]
pub struct Driver {
    seed: SeedKind,
    elements: Vec<Element>,
    /// Parents of each spawned circle, in spawn order.
    parents: Vec<Triple>,
    queue: VecDeque<Triple>,
    radius_cutoff: f64,
    max_circles: usize,
    seed_count: usize,
}
impl Driver {
    /// Create a driver over the seed elements with an empty queue.
    pub fn new(seed: SeedKind, elements: Vec<Element>, radius_cutoff: f64, max_circles: usize) -> Self {
        Driver{
            seed,
            seed_count: elements.len(),
            elements,
            parents: Vec::new(),
            queue: VecDeque::new(),
            radius_cutoff,
            max_circles,
        }
    }

    /// Queue a triple of already present elements.
    pub fn push(&mut self, triple: Triple) {
        self.queue.push_back(triple);
    }

    /// Offer a freshly solved circle spawned by `parents`.
    /// Accepted circles (finite, radius above the cutoff) are appended
    /// and their three child triples queued. Returns whether it was accepted.
    pub fn offer(&mut self, parents: Triple, circle: Circle) -> ProcResult<bool> {
        if !(circle.is_finite() && circle.radius > self.radius_cutoff) {
            return Ok(false);
        }
        if self.spawned() >= self.max_circles {
            return Err(PackingError::LimitReached(self.max_circles));
        }

        let new_id = self.elements.len();
        self.elements.push(Element::Circle(circle));
        self.parents.push(parents);

        // (p0, p1, new), (p0, p2, new), (p1, p2, new)
        for (first, second) in parents.iter().tuple_combinations() {
            self.queue.push_back([*first, *second, new_id]);
        }
        Ok(true)
    }

    /// Process one pending triple. Returns `false` once the queue is empty.
    pub fn step(&mut self) -> ProcResult<bool> {
        let parents = match self.queue.pop_front() {
            Some(parents) => parents,
            None => return Ok(false),
        };
        let circle = self.classify(parents)?.solve();
        self.offer(parents, circle)?;
        Ok(true)
    }

    /// Process pending triples until the queue is empty.
    pub fn drain(&mut self) -> ProcResult<()> {
        while self.step()? {}
        Ok(())
    }

    /// Drain the queue and hand back the full working set.
    pub fn run(mut self) -> ProcResult<Vec<Element>> {
        self.drain()?;
        Ok(self.elements)
    }

    /// The working set so far.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of circles spawned so far (seed elements excluded).
    pub fn spawned(&self) -> usize {
        self.parents.len()
    }

    /// The triple an element was spawned from, `None` for seed elements.
    pub fn parents_of(&self, id: usize) -> Option<Triple> {
        id.checked_sub(self.seed_count).and_then(|spawn_id| self.parents.get(spawn_id).copied())
    }

    /// Resolve the solver case for a triple.
    fn classify(&self, triple: Triple) -> ProcResult<Case<'_>> {
        let [e0, e1, e2] = triple.map(|id| self.elements.get(id));

        let case = match (self.seed, e0, e1, e2) {
            (SeedKind::Triangle, Some(Element::Line(l0)), Some(Element::Line(l1)), Some(Element::Line(l2))) =>
                Some(Case::Incircle(l0, l1, l2)),
            (SeedKind::Triangle, Some(Element::Line(l0)), Some(Element::Line(l1)), Some(Element::Circle(c2))) =>
                Some(Case::Corner(l0, l1, c2)),
            (SeedKind::Triangle, Some(Element::Line(l0)), Some(Element::Circle(c1)), Some(Element::Circle(c2))) =>
                Some(Case::Edge(l0, c1, c2)),
            (_, Some(Element::Circle(c0)), Some(Element::Circle(c1)), Some(Element::Circle(c2))) => {
                if self.seed == SeedKind::Gasket && triple[0] == 0 {
                    Some(Case::Enclosed(c0, c1, c2))
                } else {
                    Some(Case::Soddy(c0, c1, c2))
                }
            },
            _ => None,
        };

        match case {
            Some(case) => Ok(case),
            None => Err(PackingError::Internal(Box::new(self.fault(triple)))),
        }
    }

    /// Snapshot of the driver state for an undispatchable triple.
    fn fault(&self, triple: Triple) -> InternalFault {
        InternalFault{
            triple,
            kinds: triple.map(|id| self.elements.get(id).map(Element::kind)),
            element_count: self.elements.len(),
            queue_len: self.queue.len(),
            seed: self.seed.name(),
        }
    }
}
