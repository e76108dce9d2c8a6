use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx;

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    let effects = reduce_effects(state, event, ctx);
    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(SidebarEvent::Effect(effect))),
    )
}

fn reduce_effects(
    state: &mut SidebarState,
    event: SidebarIntent,
    _ctx: &SidebarCtx,
) -> Vec<SidebarEffect> {
    match event {
        SidebarIntent::ToggleMode => {
            let layout = state.toggle_mode();
            vec![
                SidebarEffect::ContentOffsetChanged {
                    offset: layout.content_offset as f32,
                },
                SidebarEffect::PersistMode(layout.mode),
            ]
        },
        SidebarIntent::SelectItem(index) => {
            if !state.select(index) {
                return Vec::new();
            }

            state
                .active_label()
                .map(|label| SidebarEffect::ActiveItemChanged {
                    label: label.to_string(),
                })
                .into_iter()
                .collect()
        },
    }
}
