mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
pub(crate) use model::SidebarViewModel;
use navrail_core::{SidebarLayout, SidebarMode, SidebarToggle};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Sidebar widget owning its private state.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct sidebar around a toggle restored from settings.
    pub(crate) fn new(toggle: SidebarToggle) -> Self {
        Self {
            state: SidebarState::new(toggle),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel<'_> {
        SidebarViewModel {
            mode: self.state.mode(),
            width: self.state.layout().width as f32,
            items: self.state.item_views(),
            active_item: self.state.active_item(),
        }
    }

    pub(crate) fn mode(&self) -> SidebarMode {
        self.state.mode()
    }

    /// Return the sidebar geometry for the current mode.
    pub(crate) fn layout(&self) -> SidebarLayout {
        self.state.layout()
    }

    /// Return the label of the selected item.
    pub(crate) fn active_label(&self) -> Option<String> {
        self.state.active_label().map(str::to_string)
    }
}
