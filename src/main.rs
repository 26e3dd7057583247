use gloo::console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

mod engine;
mod model;

use engine::{analyze_investment, parse_stake};
use model::{MatchId, MatchList, Settings, Side, TEAMS};

#[function_component(App)]
fn app() -> Html {
    // Committed settings plus a staged raw-text copy edited in the panel.
    let settings = use_state(Settings::default);
    let staged_target = use_state(|| format!("{}", Settings::default().target_payout));
    let staged_budget = use_state(String::new);

    let matches = use_state(|| {
        let mut list = MatchList::default();
        list.add(TEAMS[0].to_string(), TEAMS[5].to_string());
        list
    });

    // Handlers
    let on_target_input = {
        let staged_target = staged_target.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            staged_target.set(target.value());
        })
    };
    let on_budget_input = {
        let staged_budget = staged_budget.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            staged_budget.set(target.value());
        })
    };
    let on_settings_save = {
        let settings = settings.clone();
        let staged_target = staged_target.clone();
        let staged_budget = staged_budget.clone();
        let matches = matches.clone();
        Callback::from(move |_| {
            let target = parse_stake(&staged_target).unwrap_or(0.0);
            let budget = parse_stake(&staged_budget).unwrap_or(0.0);
            let next = Settings::from_inputs(target, budget);
            let mut list = (*matches).clone();
            list.recompute_recommended(&next);
            log!(format!(
                "settings committed: target {} budget {}",
                next.target_payout, next.max_budget
            ));
            settings.set(next);
            matches.set(list);
        })
    };
    let on_add_match = {
        let matches = matches.clone();
        Callback::from(move |_| {
            let mut list = (*matches).clone();
            let id = list.add(String::new(), String::new());
            log!(format!("match {} added", id.0));
            matches.set(list);
        })
    };

    let mode_hint = match settings.mode() {
        model::BudgetMode::MaxBudget(b) => format!("Budget mode: split ₹{b:.2} across both sides"),
        model::BudgetMode::TargetPayout(t) => format!("Target mode: aim for a ₹{t:.2} payout"),
    };

    html! {
        <div class="container">
            <header>
                <h1>{"BetWise Pro"}</h1>
                <div class="pill">{"Match Betting Calculator"}</div>
            </header>

            <div class="card">
                <h2>{"Settings"}</h2>
                <div class="row">
                    <div class="input-group">
                        <label>{"Target Payout (₹)"}</label>
                        <input
                            type="text"
                            placeholder={"e.g. 2100"}
                            value={(*staged_target).clone()}
                            oninput={on_target_input}
                            aria-label="Target payout" />
                    </div>
                    <div class="input-group">
                        <label>{"Maximum Budget (₹)"}</label>
                        <input
                            type="text"
                            placeholder={"0 = inactive"}
                            value={(*staged_budget).clone()}
                            oninput={on_budget_input}
                            aria-label="Maximum budget" />
                    </div>
                    <button onclick={on_settings_save} aria-label="Save settings">{"Save"}</button>
                </div>
                <div class="hint">{mode_hint}</div>
            </div>

            <div>
                { for matches.iter().map(|m| {
                    let id = m.id;
                    let matches_set = matches.clone();
                    let on_remove = Callback::from(move |_| {
                        let mut list = (*matches_set).clone();
                        list.remove(id);
                        log!(format!("match {} removed", id.0));
                        matches_set.set(list);
                    });
                    let analysis = analyze_investment(m, &settings);
                    html! {
                        <div class="card" key={id.0.to_string()}>
                            <h2>
                                <span>{match_title(m)}</span>
                                <button onclick={on_remove} class="danger" aria-label="Remove match">
                                    {"Remove"}
                                </button>
                            </h2>
                            <div class="grid">
                                { team_column(m, Side::Team1, &matches, &settings) }
                                { team_column(m, Side::Team2, &matches, &settings) }
                            </div>
                            <div class="section-divider"></div>
                            <div class="metric-grid">
                                <div class="metric-item">
                                    <div class="metric-value">{format_currency(analysis.actual_investment)}</div>
                                    <div class="metric-label">{"Actual Investment"}</div>
                                </div>
                                <div class="metric-item">
                                    <div class="metric-value">{format_currency(analysis.recommended_investment)}</div>
                                    <div class="metric-label">{"Recommended Investment"}</div>
                                </div>
                                <div class="metric-item">
                                    <div class={format!("metric-value {}", sign_class(analysis.win_profit))}>
                                        {format_currency(analysis.win_profit)}
                                    </div>
                                    <div class="metric-label">{"Combined Profit"}</div>
                                </div>
                                <div class="metric-item">
                                    <div class={format!("metric-value {}", sign_class(analysis.team1_loss_scenario))}>
                                        {format_currency(analysis.team1_loss_scenario)}
                                    </div>
                                    <div class="metric-label">{format!("If {} loses", side_label(m, Side::Team1))}</div>
                                </div>
                                <div class="metric-item">
                                    <div class={format!("metric-value {}", sign_class(analysis.team2_loss_scenario))}>
                                        {format_currency(analysis.team2_loss_scenario)}
                                    </div>
                                    <div class="metric-label">{format!("If {} loses", side_label(m, Side::Team2))}</div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
                <button onclick={on_add_match} style="width:100%;" aria-label="Add match">
                    {"Add Match"}
                </button>
            </div>

            <footer>
                {"BetWise Pro - two-sided stake planning for match betting"}
            </footer>
        </div>
    }
}

fn team_column(
    m: &model::MatchBet,
    side: Side,
    matches: &UseStateHandle<MatchList>,
    settings: &UseStateHandle<Settings>,
) -> Html {
    let id = m.id;
    let bet = m.bet(side);
    let name = m.team_name(side).to_string();
    let is_custom = !TEAMS.contains(&name.as_str());

    let on_team_select = {
        let matches = matches.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let idx = target.selected_index() as usize;
            // Indexes past the fixed list mean the "Custom" entry.
            let name = TEAMS.get(idx).map(|t| t.to_string()).unwrap_or_default();
            update_match(&matches, id, |m| m.set_team_name(side, name));
        })
    };
    let on_custom_name = {
        let matches = matches.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let name = target.value();
            update_match(&matches, id, |m| m.set_team_name(side, name));
        })
    };
    let on_odds = {
        let matches = matches.clone();
        let settings = settings.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let odds = parse_stake(&target.value());
            update_match(&matches, id, |m| m.set_odds(side, odds, &settings));
        })
    };
    let on_amount = {
        let matches = matches.clone();
        let settings = settings.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let amount = parse_stake(&target.value());
            update_match(&matches, id, |m| m.set_bet_amount(side, amount, &settings));
        })
    };

    html! {
        <div class="team-column">
            <div class="input-group">
                <label>{"Team"}</label>
                <select onchange={on_team_select} aria-label="Team selection">
                    { for TEAMS.iter().map(|t| {
                        html! { <option selected={!is_custom && *t == name}>{ *t }</option> }
                    }) }
                    <option selected={is_custom}>{"Custom"}</option>
                </select>
                { if is_custom {
                    html! {
                        <input
                            placeholder={"Team name"}
                            value={name.clone()}
                            oninput={on_custom_name}
                            aria-label="Custom team name" />
                    }
                } else { html!{} } }
            </div>
            <div class="input-group">
                <label>{"Odds"}</label>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder={"e.g. 1.85"}
                    value={bet.odds.map(|o| o.to_string()).unwrap_or_default()}
                    oninput={on_odds}
                    aria-label="Odds" />
            </div>
            <div class="input-group">
                <label>{"Bet Amount (₹)"}</label>
                <input
                    type="number"
                    min="0"
                    placeholder={"blank = use recommendation"}
                    value={bet.bet_amount.map(|a| a.to_string()).unwrap_or_default()}
                    oninput={on_amount}
                    aria-label="Bet amount" />
            </div>
            <div class="muted">{"Estimated Payout"}</div>
            <div class="result success">{format_currency(bet.estimated_payout)}</div>
            <div class="muted">{"Recommended Bet"}</div>
            <div class="result">{format_currency(bet.recommended_amount)}</div>
        </div>
    }
}

fn update_match(
    matches: &UseStateHandle<MatchList>,
    id: MatchId,
    f: impl FnOnce(&mut model::MatchBet),
) {
    let mut list = (**matches).clone();
    if let Some(m) = list.get_mut(id) {
        f(m);
    }
    matches.set(list);
}

fn match_title(m: &model::MatchBet) -> String {
    format!("{} vs {}", side_label(m, Side::Team1), side_label(m, Side::Team2))
}

fn side_label(m: &model::MatchBet, side: Side) -> String {
    let name = m.team_name(side);
    if name.is_empty() {
        match side { Side::Team1 => "Team 1".into(), Side::Team2 => "Team 2".into() }
    } else {
        name.to_string()
    }
}

fn format_currency(v: f64) -> String { format!("₹{:.2}", v) }

fn sign_class(v: f64) -> &'static str {
    if v > 0.0 { "success" } else if v < 0.0 { "danger" } else { "muted" }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
