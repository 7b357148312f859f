// Editor session - owns the one grid, its paint controller and the latest export

use crate::config::{ExportConfig, GridInput, GridSpec};
use crate::export::{self, SavedExport};
use crate::geometry::{GridGeometry, SegmentHitTester};
use crate::grid::{EdgeGrid, EdgeRef};
use crate::maze_errors::MazeResult;
use crate::paint::{HitTest, PaintController, PaintOutcome, PaintState, PointerEvent};
use log::{debug, info, warn};
use std::path::Path;

/// Everything the editor knows about the maze being authored.
///
/// The presentation layer reads through the accessors and mutates only
/// through the methods below.
#[derive(Debug)]
pub struct EditorSession {
    spec: GridSpec,
    show_dots: bool,
    grid: EdgeGrid,
    paint: PaintController,
    geometry: GridGeometry,
    hit_tester: SegmentHitTester,
    last_export: String,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(GridSpec::default(), true)
    }
}

impl EditorSession {
    pub fn new(spec: GridSpec, show_dots: bool) -> Self {
        let geometry = GridGeometry::new(spec, show_dots);
        let mut session = Self {
            spec,
            show_dots,
            grid: EdgeGrid::new(spec),
            paint: PaintController::new(),
            hit_tester: geometry.hit_tester(),
            geometry,
            last_export: String::new(),
        };
        session.refresh_export();
        session
    }

    /// Build from raw host input, replacing the current grid wholesale
    pub fn from_input(input: &GridInput) -> Self {
        let mut session = Self::default();
        session.build(input);
        session
    }

    /// Rebuild from raw host input. Malformed values fall back to defaults.
    pub fn build(&mut self, input: &GridInput) {
        self.build_spec(input.to_spec(), input.show_dots);
    }

    /// Rebuild from a resolved spec. Any gesture in progress is dropped.
    pub fn build_spec(&mut self, spec: GridSpec, show_dots: bool) {
        *self = Self::new(spec, show_dots);
        info!(
            "🧱 Built {}x{} grid ({} edges, cell {}, stroke {})",
            spec.cols(),
            spec.rows(),
            spec.edge_count(),
            spec.cell_size(),
            spec.stroke_width()
        );
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn show_dots(&self) -> bool {
        self.show_dots
    }

    pub fn grid(&self) -> &EdgeGrid {
        &self.grid
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn paint_state(&self) -> PaintState {
        self.paint.state()
    }

    pub fn paint(&self) -> &PaintController {
        &self.paint
    }

    /// Snapshot taken at the last build, clear, invert or gesture end
    pub fn last_export(&self) -> &str {
        &self.last_export
    }

    pub fn is_on(&self, edge: EdgeRef) -> bool {
        self.grid.is_on(edge)
    }

    pub fn is_locked(&self, edge: EdgeRef) -> bool {
        self.grid.is_locked(edge)
    }

    pub fn set_on(&mut self, edge: EdgeRef, on: bool) {
        self.grid.set_on(edge, on);
    }

    pub fn toggle(&mut self, edge: EdgeRef) -> bool {
        self.grid.toggle(edge)
    }

    pub fn clear_all(&mut self) {
        self.grid.clear_all();
        debug!("Cleared all walls");
        self.refresh_export();
    }

    pub fn invert_all(&mut self) {
        self.grid.invert_all();
        debug!("Inverted all walls");
        self.refresh_export();
    }

    /// Feed a pointer event, hit-tested with the host's own `HitTest`
    pub fn pointer_event_with<H>(&mut self, hit: &H, event: PointerEvent) -> PaintOutcome
    where
        H: HitTest + ?Sized,
    {
        let outcome = self.paint.handle(&mut self.grid, hit, event);
        if outcome.ended() {
            self.refresh_export();
        }
        outcome
    }

    /// Feed a pointer event, hit-tested against this grid's geometry
    pub fn pointer_event(&mut self, event: PointerEvent) -> PaintOutcome {
        let outcome = self.paint.handle(&mut self.grid, &self.hit_tester, event);
        if outcome.ended() {
            self.refresh_export();
        }
        outcome
    }

    /// Pointer-down resolved by the host to `edge`
    pub fn begin_paint(&mut self, edge: Option<EdgeRef>, pointer_id: u32) -> PaintOutcome {
        self.paint.begin(&mut self.grid, edge, pointer_id)
    }

    /// Pointer moved over `edge` during a gesture
    pub fn paint_over(&mut self, edge: Option<EdgeRef>, pointer_id: u32) -> PaintOutcome {
        self.paint.visit(&mut self.grid, edge, pointer_id)
    }

    /// Pointer-up or capture loss
    pub fn end_paint(&mut self, pointer_id: u32) -> PaintOutcome {
        let outcome = self.paint.end(pointer_id);
        if outcome.ended() {
            self.refresh_export();
        }
        outcome
    }

    /// Serialize the current state, independent of the cached snapshot
    pub fn export(&self) -> MazeResult<String> {
        export::serialize(&self.grid)
    }

    /// Write the current state using `settings`; `path` overrides the
    /// configured file name
    pub fn save_export(
        &self,
        settings: &ExportConfig,
        path: Option<&Path>,
    ) -> MazeResult<SavedExport> {
        let text = self.export()?;
        let path = path.unwrap_or_else(|| Path::new(&settings.file_name));
        export::write_export(&text, path, &settings.content_type)
    }

    fn refresh_export(&mut self) {
        match export::serialize(&self.grid) {
            Ok(text) => self.last_export = text,
            Err(e) => warn!("⚠️ Failed to refresh export snapshot: {}", e),
        }
    }
}
