use crate::{
    config::BoardConfig,
    domain::{
        lane::Lane,
        reconciler::{MoveOutcome, MoveSink},
    },
    drag::{DragLibrary, ElementAttributes},
    error::{BoardError, Result},
};
use uuid::Uuid;

/// A drag library attached to the board's three drop zones.
///
/// Attaching hands the library over to the adapter. The library is destroyed
/// exactly once, either by [`DragGestureAdapter::detach`] or when the adapter
/// is dropped, including during unwinding.
pub struct DragGestureAdapter<L: DragLibrary> {
    library: L,
    session: Uuid,
    card_attribute: String,
    lane_attribute: String,
    released: bool,
}

impl<L: DragLibrary> DragGestureAdapter<L> {
    /// Registers the rendered drop zones with the library.
    ///
    /// Each zone must carry a recognized lane label and the three zones must
    /// cover all three lanes.
    pub fn attach(mut library: L, zones: [L::Zone; 3], config: &BoardConfig) -> Result<Self> {
        let mut covered: Vec<Lane> = Vec::with_capacity(zones.len());
        for zone in &zones {
            let label = zone.attribute(&config.lane_attribute).ok_or_else(|| {
                BoardError::InvalidDropZone(format!(
                    "missing '{}' attribute",
                    config.lane_attribute
                ))
            })?;
            let lane: Lane = label.parse().map_err(|_| {
                BoardError::InvalidDropZone(format!("unrecognized lane '{}'", label))
            })?;
            if covered.contains(&lane) {
                return Err(BoardError::InvalidDropZone(format!(
                    "lane '{}' registered twice",
                    lane
                )));
            }
            covered.push(lane);
        }

        library.watch(zones.into());

        let session = Uuid::new_v4();
        tracing::info!(%session, "Drag adapter attached");

        Ok(Self {
            library,
            session,
            card_attribute: config.card_attribute.clone(),
            lane_attribute: config.lane_attribute.clone(),
            released: false,
        })
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Handles the library's drop notification.
    ///
    /// The library's own relocation of `moved` is cancelled before anything
    /// reaches the sink, then the card id and both lane labels are read from
    /// the elements and forwarded.
    pub fn on_drop<S, E>(&mut self, sink: &mut S, moved: &E, target: &E, source: &E) -> MoveOutcome
    where
        S: MoveSink + ?Sized,
        E: ElementAttributes + ?Sized,
    {
        self.library.cancel();

        let target_lane = target.attribute(&self.lane_attribute).unwrap_or_default();
        let source_lane = source.attribute(&self.lane_attribute).unwrap_or_default();

        let Some(card_id) = moved
            .attribute(&self.card_attribute)
            .filter(|id| !id.trim().is_empty())
        else {
            tracing::warn!(
                session = %self.session,
                attribute = %self.card_attribute,
                "Dropped element has no card id"
            );
            return MoveOutcome::MissingCardId;
        };

        tracing::debug!(
            session = %self.session,
            card_id = %card_id,
            source_lane = %source_lane,
            target_lane = %target_lane,
            "Drop received"
        );
        sink.handle_move(&card_id, &source_lane, &target_lane)
    }

    /// Releases the library at unmount
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.library.destroy();
        tracing::info!(session = %self.session, "Drag adapter detached");
    }
}

impl<L: DragLibrary> Drop for DragGestureAdapter<L> {
    fn drop(&mut self) {
        self.release();
    }
}
