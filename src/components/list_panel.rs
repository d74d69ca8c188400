use std::collections::HashSet;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{Universe, UniverseAction};

#[derive(Properties, PartialEq, Clone)]
pub struct ListPanelProps {
    pub universe: UseReducerHandle<Universe>,
}

fn prompt(message: &str) -> Option<String> {
    web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

const BTN_STYLE: &str = "background:#21262d; color:#c9d1d9; border:1px solid #30363d; \
    border-radius:4px; padding:2px 8px; font-size:12px; cursor:pointer;";
const DELETE_STYLE: &str = "background:#3d1d20; color:#f85149; border:1px solid #6e2228; \
    border-radius:4px; padding:2px 8px; font-size:12px; cursor:pointer;";

#[function_component(ListPanel)]
pub fn list_panel(props: &ListPanelProps) -> Html {
    let input_ref = use_node_ref();
    let folded_systems = use_state(HashSet::<usize>::new);
    let folded_planets = use_state(HashSet::<(usize, usize)>::new);

    let submit_system = {
        let universe = props.universe.clone();
        let input_ref = input_ref.clone();
        move || {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let name = input.value();
                if !name.trim().is_empty() {
                    universe.dispatch(UniverseAction::AddSystem { name });
                    input.set_value("");
                }
            }
        }
    };
    let add_system = {
        let submit_system = submit_system.clone();
        Callback::from(move |_: MouseEvent| submit_system())
    };
    let add_system_on_enter = {
        let submit_system = submit_system.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit_system();
            }
        })
    };
    let clear_universe = {
        let universe = props.universe.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm("Are you sure you want to clear your entire universe?") {
                universe.dispatch(UniverseAction::Clear);
            }
        })
    };

    let systems = props
        .universe
        .systems
        .iter()
        .enumerate()
        .map(|(system_index, system)| {
            let fold_system = {
                let folded = folded_systems.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut set = (*folded).clone();
                    if !set.remove(&system_index) {
                        set.insert(system_index);
                    }
                    folded.set(set);
                })
            };
            let add_planet = {
                let universe = props.universe.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    if let Some(name) = prompt("Planet name:") {
                        universe.dispatch(UniverseAction::AddPlanet { system_index, name });
                    }
                })
            };
            let delete_system = {
                let universe = props.universe.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    universe.dispatch(UniverseAction::RemoveSystem { system_index });
                })
            };

            let planets = system
                .planets
                .iter()
                .enumerate()
                .map(|(planet_index, planet)| {
                    let fold_planet = {
                        let folded = folded_planets.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut set = (*folded).clone();
                            if !set.remove(&(system_index, planet_index)) {
                                set.insert((system_index, planet_index));
                            }
                            folded.set(set);
                        })
                    };
                    let add_mission = {
                        let universe = props.universe.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            if let Some(name) = prompt("Mission name:") {
                                universe.dispatch(UniverseAction::AddMission {
                                    system_index,
                                    planet_index,
                                    name,
                                });
                            }
                        })
                    };
                    let delete_planet = {
                        let universe = props.universe.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            universe.dispatch(UniverseAction::RemovePlanet {
                                system_index,
                                planet_index,
                            });
                        })
                    };

                    let missions = planet
                        .missions
                        .iter()
                        .enumerate()
                        .map(|(mission_index, mission)| {
                            let toggle = {
                                let universe = props.universe.clone();
                                Callback::from(move |_: Event| {
                                    universe.dispatch(UniverseAction::ToggleMission {
                                        system_index,
                                        planet_index,
                                        mission_index,
                                    });
                                })
                            };
                            let delete_mission = {
                                let universe = props.universe.clone();
                                Callback::from(move |_: MouseEvent| {
                                    universe.dispatch(UniverseAction::RemoveMission {
                                        system_index,
                                        planet_index,
                                        mission_index,
                                    });
                                })
                            };
                            let label_style = if mission.completed {
                                "color:#2ea043; text-decoration:line-through;"
                            } else {
                                "color:#c9d1d9;"
                            };
                            html! {
                                <div style="display:flex; justify-content:space-between; align-items:center; margin:2px 0;">
                                    <label style="display:flex; align-items:center; gap:6px; font-size:13px;">
                                        <input
                                            type="checkbox"
                                            checked={mission.completed}
                                            onchange={toggle}
                                        />
                                        <span style={label_style}>{ &mission.name }</span>
                                    </label>
                                    <button style={DELETE_STYLE} onclick={delete_mission}>{"X"}</button>
                                </div>
                            }
                        })
                        .collect::<Html>();

                    let body = if folded_planets.contains(&(system_index, planet_index)) {
                        html! {}
                    } else {
                        html! { <div style="margin:4px 0 2px 18px;">{ missions }</div> }
                    };

                    html! {
                        <div style="border:1px solid #21262d; border-radius:6px; padding:6px; margin:4px 0;">
                            <div
                                onclick={fold_planet}
                                style="display:flex; justify-content:space-between; align-items:center; cursor:pointer;"
                            >
                                <span style="font-size:13px;">{"🪐 "}{ &planet.name }</span>
                                <div style="display:flex; gap:6px;">
                                    <button style={BTN_STYLE} onclick={add_mission}>{"+ Mission"}</button>
                                    <button style={DELETE_STYLE} onclick={delete_planet}>{"X"}</button>
                                </div>
                            </div>
                            { body }
                        </div>
                    }
                })
                .collect::<Html>();

            let body = if folded_systems.contains(&system_index) {
                html! {}
            } else {
                html! { <div style="margin-top:4px;">{ planets }</div> }
            };

            html! {
                <div style="border:1px solid #30363d; border-radius:6px; padding:8px;">
                    <div
                        onclick={fold_system}
                        style="display:flex; justify-content:space-between; align-items:center; cursor:pointer;"
                    >
                        <span style="font-weight:600;">{"🌌 "}{ &system.name }</span>
                        <div style="display:flex; gap:6px;">
                            <button style={BTN_STYLE} onclick={add_planet}>{"+ Planet"}</button>
                            <button style={DELETE_STYLE} onclick={delete_system}>{"X"}</button>
                        </div>
                    </div>
                    { body }
                </div>
            }
        })
        .collect::<Html>();

    let empty_notice = if props.universe.systems.is_empty() {
        html! { <p style="opacity:0.6; font-size:13px;">{"No solar systems yet. Add one!"}</p> }
    } else {
        html! {}
    };

    html! {
        <div style="position:absolute; top:12px; left:12px; bottom:12px; width:300px; \
            overflow-y:auto; background:rgba(22,27,34,0.92); border:1px solid #30363d; \
            border-radius:8px; padding:12px; display:flex; flex-direction:column; gap:8px;">
            <div style="font-weight:600; font-size:15px;">{"Universe"}</div>
            <div style="display:flex; gap:6px;">
                <input
                    ref={input_ref}
                    placeholder="New system name"
                    onkeypress={add_system_on_enter}
                    style="flex:1; background:#0d1117; color:#c9d1d9; border:1px solid #30363d; \
                        border-radius:4px; padding:4px 8px; font-size:13px;"
                />
                <button style={BTN_STYLE} onclick={add_system}>{"Add"}</button>
            </div>
            { empty_notice }
            { systems }
            <div style="margin-top:auto; padding-top:8px;">
                <button style={DELETE_STYLE} onclick={clear_universe}>{"Clear Universe"}</button>
            </div>
        </div>
    }
}
