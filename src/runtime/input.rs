//! Keyboard input handling for the demo
//!
//! Keys are first mapped to a [`DemoAction`], which is then applied to the
//! panel. The mapping is kept separate so it can be tested without a window.

use winit::keyboard::{Key, NamedKey};

use dockmenu::panel::{Corner, Panel};
use dockmenu::text::TextMeasure;

/// Padding and buffer change per key press
const STEP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    Dock(Corner),
    AddItem,
    RemoveLast,
    RemoveFirst,
    ToggleBounds,
    ToggleOutlines,
    TogglePanel,
    GrowBuffer,
    ShrinkBuffer,
    GrowPadding,
    ShrinkPadding,
}

/// Map a logical key to a demo action
pub fn action_for_key(key: &Key) -> Option<DemoAction> {
    match key {
        Key::Named(NamedKey::Backspace) => Some(DemoAction::RemoveLast),
        Key::Named(NamedKey::Delete) => Some(DemoAction::RemoveFirst),
        Key::Character(ch) => match ch.to_lowercase().as_str() {
            "1" => Some(DemoAction::Dock(Corner::TopLeft)),
            "2" => Some(DemoAction::Dock(Corner::TopRight)),
            "3" => Some(DemoAction::Dock(Corner::BottomLeft)),
            "4" => Some(DemoAction::Dock(Corner::BottomRight)),
            "a" => Some(DemoAction::AddItem),
            "b" => Some(DemoAction::ToggleBounds),
            "o" => Some(DemoAction::ToggleOutlines),
            "h" => Some(DemoAction::TogglePanel),
            "=" | "+" => Some(DemoAction::GrowBuffer),
            "-" => Some(DemoAction::ShrinkBuffer),
            "]" => Some(DemoAction::GrowPadding),
            "[" => Some(DemoAction::ShrinkPadding),
            _ => None,
        },
        _ => None,
    }
}

/// Apply an action to the panel. Returns whether anything changed.
///
/// `added` counts items added through the demo so far and names new ones.
pub fn apply_action<M: TextMeasure>(
    panel: &mut Panel<M>,
    action: DemoAction,
    added: &mut usize,
) -> bool {
    let result = match action {
        DemoAction::Dock(corner) => {
            panel.set_docking_position(corner);
            Ok(())
        }
        DemoAction::AddItem => {
            let text = format!("Item {}", *added + 1);
            panel.add_item(&text).map(|_| *added += 1)
        }
        DemoAction::RemoveLast => panel.remove_last(),
        DemoAction::RemoveFirst => panel.remove_first(),
        DemoAction::ToggleBounds => {
            panel.toggle_bounds();
            Ok(())
        }
        DemoAction::ToggleOutlines => {
            panel.toggle_component_outlines();
            Ok(())
        }
        DemoAction::TogglePanel => {
            panel.toggle_shown();
            Ok(())
        }
        DemoAction::GrowBuffer => panel.set_component_buffer(panel.component_buffer() + STEP as i32),
        DemoAction::ShrinkBuffer => {
            panel.set_component_buffer((panel.component_buffer() - STEP as i32).max(0))
        }
        DemoAction::GrowPadding => {
            let padding = panel.padding();
            panel.set_padding(padding.x + STEP, padding.y + STEP)
        }
        DemoAction::ShrinkPadding => {
            let padding = panel.padding();
            panel.set_padding((padding.x - STEP).max(0.0), (padding.y - STEP).max(0.0))
        }
    };

    match result {
        Ok(()) => {
            tracing::debug!("Applied {:?}", action);
            true
        }
        Err(e) => {
            tracing::debug!("Ignored {:?}: {}", action, e);
            false
        }
    }
}
