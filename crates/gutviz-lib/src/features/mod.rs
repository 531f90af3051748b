//! Seams to the annotation pipeline's feature types.
//!
//! The pipeline producing CDS and domain features lives elsewhere; the view
//! builders only need the small slices declared here.

/// A structural domain located within a coding sequence's translation.
pub trait DomainFeature {
    fn name(&self) -> &str;
    fn start(&self) -> usize;
    fn end(&self) -> usize;
}

/// An annotated protein-coding region.
pub trait CdsFeature {
    fn name(&self) -> &str;
    fn translation(&self) -> &str;
}
