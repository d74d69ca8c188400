use yew::prelude::*;

use super::{detail_sidebar::DetailSidebar, list_panel::ListPanel, map_view::MapView};
use crate::model::{Selection, Universe};
use crate::state::{HitTarget, SuspendPolicy};
use crate::storage;

/// Opening a detail view suspends the autopilot for the rest of the session.
/// Flip to `ResumeOnClose` to re-enable it when the sidebar closes.
const SUSPEND_POLICY: SuspendPolicy = SuspendPolicy::Permanent;

#[function_component(App)]
pub fn app() -> Html {
    let universe = use_reducer(storage::load_universe);
    let selection = use_state(|| None::<Selection>);
    let autopilot_active = use_state(|| true);

    // Persist the whole tree whenever a mutation lands.
    {
        let universe = universe.clone();
        use_effect_with(universe.version, move |_| {
            storage::save_universe(&universe);
            || ()
        });
    }

    let on_select = {
        let selection = selection.clone();
        let autopilot_active = autopilot_active.clone();
        Callback::from(move |target: HitTarget| {
            selection.set(Some(match target {
                HitTarget::System { system_index } => Selection::System { system_index },
                HitTarget::Planet {
                    system_index,
                    planet_index,
                } => Selection::Planet {
                    system_index,
                    planet_index,
                },
            }));
            autopilot_active.set(false);
        })
    };

    let on_close = {
        let selection = selection.clone();
        let autopilot_active = autopilot_active.clone();
        Callback::from(move |_| {
            selection.set(None);
            if SUSPEND_POLICY == SuspendPolicy::ResumeOnClose {
                autopilot_active.set(true);
            }
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <MapView
                universe={universe.clone()}
                on_select={on_select}
                autopilot_active={*autopilot_active}
            />
            <ListPanel universe={universe.clone()} />
            <DetailSidebar
                universe={universe.clone()}
                selection={*selection}
                on_close={on_close}
            />
        </div>
    }
}
