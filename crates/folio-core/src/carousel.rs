use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{Category, Project};

/// Shuffled copy of `items` cut to at most `n`. The input is left untouched.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut picks = items.to_vec();
    picks.shuffle(rng);
    picks.truncate(n);
    picks
}

/// Active category plus the random slide drawn from it.
///
/// Every activation, including re-activating the same category, draws a fresh
/// sample; nothing is remembered between visits.
pub struct Carousel<R: Rng = StdRng> {
    categories: Vec<Category>,
    active: usize,
    slide: Vec<Project>,
    sample_size: usize,
    rng: R,
}

impl Carousel<StdRng> {
    pub fn from_entropy(categories: Vec<Category>, sample_size: usize) -> Self {
        Self::new(categories, sample_size, StdRng::from_entropy())
    }
}

impl<R: Rng> Carousel<R> {
    /// Categories with no projects are dropped before the first draw.
    pub fn new(categories: Vec<Category>, sample_size: usize, rng: R) -> Self {
        let categories: Vec<Category> = categories
            .into_iter()
            .filter(|c| !c.projects.is_empty())
            .collect();
        let mut carousel = Self {
            categories,
            active: 0,
            slide: Vec::new(),
            sample_size,
            rng,
        };
        carousel.activate(0);
        carousel
    }

    /// Next category, wrapping to the first.
    pub fn advance(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let next = (self.active + 1) % self.categories.len();
        self.activate(next);
    }

    /// Previous category, wrapping to the last.
    pub fn retreat(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let n = self.categories.len();
        let prev = (self.active + n - 1) % n;
        self.activate(prev);
    }

    /// Jump to `index`. Out-of-range indices are ignored and return false.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.activate(index);
        true
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        self.slide = match self.categories.get(index) {
            Some(category) => sample(&category.projects, self.sample_size, &mut self.rng),
            None => Vec::new(),
        };
        if let Some(category) = self.categories.get(index) {
            log::debug!(
                "[carousel] category {} '{}' showing {}/{}",
                index,
                category.name,
                self.slide.len(),
                category.projects.len()
            );
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.categories.get(self.active)
    }

    pub fn slide(&self) -> &[Project] {
        &self.slide
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
