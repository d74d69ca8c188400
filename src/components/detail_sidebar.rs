use yew::prelude::*;

use crate::model::{Progress, Selection, Universe};

#[derive(Properties, PartialEq, Clone)]
pub struct DetailSidebarProps {
    pub universe: UseReducerHandle<Universe>,
    pub selection: Option<Selection>,
    pub on_close: Callback<()>,
}

const PANEL_STYLE: &str = "position:absolute; right:12px; top:50%; transform:translateY(-50%); \
    background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; \
    padding:12px 16px; min-width:240px; max-width:300px; font-size:13px; color:#c9d1d9;";
const HEADER_STYLE: &str =
    "font-weight:600; font-size:15px; margin-bottom:8px; display:flex; align-items:center; gap:8px;";
const STAT_ROW_STYLE: &str =
    "display:flex; justify-content:space-between; margin:4px 0; font-size:12px;";
const STAT_LABEL_STYLE: &str = "color:#8b949e;";

fn progress_bar(progress: Progress) -> Html {
    let percent = progress.percent();
    html! {
        <>
            <div style="background:#333; border-radius:6px; height:14px; width:100%; margin-top:10px; overflow:hidden;">
                <div style={format!("background:#2ea043; height:100%; width:{}%;", percent)}></div>
            </div>
            <p style="text-align:right; margin:2px 0 0 0; font-size:12px;">
                { format!("{}% completed", percent) }
            </p>
        </>
    }
}

fn stat_row(label: &str, value: String) -> Html {
    html! {
        <div style={STAT_ROW_STYLE}>
            <span style={STAT_LABEL_STYLE}>{ label }</span>
            <span style="font-weight:500;">{ value }</span>
        </div>
    }
}

#[function_component(DetailSidebar)]
pub fn detail_sidebar(props: &DetailSidebarProps) -> Html {
    let Some(selection) = props.selection else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = html! {
        <button
            onclick={close}
            style="position:absolute; top:6px; right:8px; background:none; border:none; \
                color:#8b949e; font-size:16px; cursor:pointer;"
        >{"×"}</button>
    };

    // Selection indices can go stale if the entity is deleted from the list
    // panel while the sidebar is open; resolve against the current tree and
    // show nothing on a miss.
    match selection {
        Selection::System { system_index } => {
            let Some(system) = props.universe.systems.get(system_index) else {
                return html! {};
            };
            let progress = system.progress();
            html! {
                <div style={PANEL_STYLE}>
                    { close_button }
                    <div style={HEADER_STYLE}>
                        <span>{"🌌"}</span>
                        <span>{ &system.name }</span>
                    </div>
                    { stat_row("Planets", system.planets.len().to_string()) }
                    { stat_row("Missions", progress.total.to_string()) }
                    { stat_row("Completed", progress.completed.to_string()) }
                    { progress_bar(progress) }
                </div>
            }
        }
        Selection::Planet {
            system_index,
            planet_index,
        } => {
            let Some(planet) = props
                .universe
                .systems
                .get(system_index)
                .and_then(|s| s.planets.get(planet_index))
            else {
                return html! {};
            };
            let progress = planet.progress();
            let missions = planet
                .missions
                .iter()
                .map(|mission| {
                    let (glyph, color) = if mission.completed {
                        ("✔️", "#2ea043")
                    } else {
                        ("⏳", "#c9d1d9")
                    };
                    html! {
                        <li style={format!("color:{}; margin:2px 0;", color)}>
                            { glyph }{" "}{ &mission.name }
                        </li>
                    }
                })
                .collect::<Html>();
            html! {
                <div style={PANEL_STYLE}>
                    { close_button }
                    <div style={HEADER_STYLE}>
                        <span>{"🪐"}</span>
                        <span>{ &planet.name }</span>
                    </div>
                    { stat_row("Missions", progress.total.to_string()) }
                    { stat_row("Completed", progress.completed.to_string()) }
                    <p style="margin:8px 0 2px 0; color:#8b949e;">{"Mission log:"}</p>
                    <ul style="margin:0; padding-left:18px; list-style:none;">
                        { missions }
                    </ul>
                    { progress_bar(progress) }
                </div>
            }
        }
    }
}
