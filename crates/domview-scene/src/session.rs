//! In-memory viewer session
//!
//! A session owns one loaded structure together with the per-atom styles and
//! camera derived from it. Loading a new structure means creating a new
//! session; a closed session rejects every further call.

use domview_mol::{AtomIndex, Structure};
use domview_select::{AtomSelector, SelectError, SelectionResult};
use domview_settings::{StyleDelta, StyleOptions};

use crate::camera::Camera;
use crate::error::{ViewerError, ViewerResult};
use crate::viewer_trait::StructureViewer;

#[derive(Debug)]
pub struct ViewerSession {
    structure: Structure,
    styles: Vec<StyleOptions>,
    camera: Camera,
    closed: bool,
}

impl ViewerSession {
    /// Open a session on a freshly loaded structure
    ///
    /// Every atom starts visible in the default style and the camera is fitted
    /// to the whole structure.
    pub fn new(structure: Structure) -> Self {
        let mut camera = Camera::new();
        if let Some((min, max)) = structure.bounding_box(None) {
            camera.zoom_to(min, max);
        }
        log::debug!(
            "Opened viewer session for '{}' ({} atoms)",
            structure.name,
            structure.atom_count()
        );
        ViewerSession {
            styles: vec![StyleOptions::default(); structure.atom_count()],
            structure,
            camera,
            closed: false,
        }
    }

    /// Release the session; later calls fail with [`ViewerError::Unavailable`]
    pub fn close(&mut self) {
        if !self.closed {
            log::debug!("Closed viewer session for '{}'", self.structure.name);
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> ViewerResult<()> {
        if self.closed {
            Err(ViewerError::Unavailable(format!(
                "session for '{}' is closed",
                self.structure.name
            )))
        } else {
            Ok(())
        }
    }

    fn check_size(&self, selection: &SelectionResult) -> ViewerResult<()> {
        if selection.atom_count() != self.structure.atom_count() {
            return Err(SelectError::SizeMismatch(
                selection.atom_count(),
                self.structure.atom_count(),
            )
            .into());
        }
        Ok(())
    }

    pub fn style(&self, index: AtomIndex) -> Option<&StyleOptions> {
        self.styles.get(index.as_usize())
    }

    pub fn styles(&self) -> &[StyleOptions] {
        &self.styles
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Indices of atoms currently shown
    pub fn shown_atoms(&self) -> Vec<AtomIndex> {
        self.styles
            .iter()
            .enumerate()
            .filter(|(_, style)| style.is_shown())
            .map(|(i, _)| AtomIndex(i as u32))
            .collect()
    }
}

impl StructureViewer for ViewerSession {
    fn structure(&self) -> ViewerResult<&Structure> {
        self.ensure_open()?;
        Ok(&self.structure)
    }

    fn select(&self, selector: &AtomSelector) -> ViewerResult<SelectionResult> {
        self.ensure_open()?;
        Ok(selector.evaluate(&self.structure))
    }

    fn apply_style(&mut self, selection: &SelectionResult, delta: &StyleDelta) -> ViewerResult<usize> {
        self.ensure_open()?;
        self.check_size(selection)?;

        let mut touched = 0;
        for idx in selection.indices() {
            if let Some(style) = self.styles.get_mut(idx.as_usize()) {
                *style = style.apply(delta);
                touched += 1;
            }
        }
        Ok(touched)
    }

    fn zoom_to(&mut self, selection: &SelectionResult) -> ViewerResult<()> {
        self.ensure_open()?;
        self.check_size(selection)?;

        let indices: Vec<AtomIndex> = selection.indices().collect();
        let (min, max) = self
            .structure
            .bounding_box(Some(&indices))
            .ok_or(ViewerError::EmptySelection)?;
        self.camera.zoom_to(min, max);
        Ok(())
    }

    fn is_available(&self) -> bool {
        !self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domview_color::Color;
    use domview_mol::{AtomBuilder, StructureBuilder};
    use lin_alg::f32::Vec3;

    fn session() -> ViewerSession {
        let mut builder = StructureBuilder::new("s");
        for (i, chain) in ["A", "A", "A", "B"].iter().enumerate() {
            builder = builder.add_atom(
                AtomBuilder::new()
                    .name("CA")
                    .element_symbol("C")
                    .resn("ALA")
                    .resv(i as i32 + 1)
                    .chain(*chain)
                    .build(),
                Vec3::new(i as f32 * 10.0, 0.0, 0.0),
            );
        }
        ViewerSession::new(builder.build())
    }

    #[test]
    fn test_hide_all_then_style_chain() {
        let mut session = session();
        assert_eq!(session.shown_atoms().len(), 4);

        assert_eq!(session.hide_all().unwrap(), 4);
        assert!(session.shown_atoms().is_empty());

        let chain_a = session.select(&AtomSelector::chain("A")).unwrap();
        let touched = session
            .apply_style(&chain_a, &StyleDelta::show(Color::GRAY, 0.4))
            .unwrap();
        assert_eq!(touched, 3);
        assert_eq!(session.shown_atoms().len(), 3);
        assert_eq!(session.style(AtomIndex(0)).unwrap().opacity, 0.4);
        assert!(!session.style(AtomIndex(3)).unwrap().visible);
    }

    #[test]
    fn test_zoom_to_selection() {
        let mut session = session();
        let sel = session.select(&AtomSelector::chain_range("A", 2, 3)).unwrap();
        session.zoom_to(&sel).unwrap();
        assert_eq!(session.camera().origin.x, 15.0);

        let empty = session.select(&AtomSelector::chain("Z")).unwrap();
        assert_eq!(session.zoom_to(&empty), Err(ViewerError::EmptySelection));
    }

    #[test]
    fn test_foreign_selection_is_rejected() {
        let mut session = session();
        let foreign = SelectionResult::all(10);
        assert!(matches!(
            session.apply_style(&foreign, &StyleDelta::hide()),
            Err(ViewerError::Selection(SelectError::SizeMismatch(10, 4)))
        ));
    }

    #[test]
    fn test_closed_session_is_unavailable() {
        let mut session = session();
        session.close();
        assert!(!session.is_available());
        assert!(matches!(session.structure(), Err(ViewerError::Unavailable(_))));
        assert!(matches!(session.hide_all(), Err(ViewerError::Unavailable(_))));
        assert!(matches!(
            session.select(&AtomSelector::all()),
            Err(ViewerError::Unavailable(_))
        ));
    }
}
