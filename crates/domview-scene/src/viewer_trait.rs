//! Viewer abstraction trait
//!
//! Domain styling talks to the viewer only through [`StructureViewer`]:
//! select atoms with an [`AtomSelector`], then restyle the selection.

use domview_mol::Structure;
use domview_select::{AtomSelector, SelectionResult};
use domview_settings::StyleDelta;

use crate::error::ViewerResult;

pub trait StructureViewer {
    /// The loaded structure
    fn structure(&self) -> ViewerResult<&Structure>;

    /// Evaluate a selector against the loaded structure
    fn select(&self, selector: &AtomSelector) -> ViewerResult<SelectionResult>;

    /// Apply a style change to every selected atom, returning the number of atoms touched
    fn apply_style(&mut self, selection: &SelectionResult, delta: &StyleDelta) -> ViewerResult<usize>;

    /// Fit the camera to the selected atoms
    fn zoom_to(&mut self, selection: &SelectionResult) -> ViewerResult<()>;

    /// Whether the viewer can currently accept calls
    fn is_available(&self) -> bool;

    /// Hide every atom
    fn hide_all(&mut self) -> ViewerResult<usize> {
        let all = self.select(&AtomSelector::all())?;
        self.apply_style(&all, &StyleDelta::hide())
    }
}
