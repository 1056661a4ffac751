use leptos::prelude::*;
use surge_core::ChartSeries;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 220.0;
const AXIS: f64 = 24.0;

#[component]
pub fn ResultsChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    move || {
        let s = series.get();
        if s.is_empty() {
            return view! {
                <p class="placeholder">"Run a load test to see results"</p>
            }
            .into_any();
        }

        let slot = WIDTH / s.bars.len() as f64;
        let bars = s
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let h = s.bar_height(bar.count, HEIGHT - AXIS);
                let x = i as f64 * slot;
                let tip = format!(
                    "{:.3} - {:.3} ms: {} ({:.1}%)",
                    bar.start_ms, bar.end_ms, bar.count, bar.percent
                );
                view! {
                    <g>
                        <rect
                            class="bar"
                            data-tip=tip
                            x=format!("{:.1}", x + 1.0)
                            y=format!("{:.1}", HEIGHT - AXIS - h)
                            width=format!("{:.1}", (slot - 2.0).max(1.0))
                            height=format!("{:.1}", h)
                        ></rect>
                        <text
                            class="bar-label"
                            x=format!("{:.1}", x + slot / 2.0)
                            y=format!("{:.1}", HEIGHT - 6.0)
                            text-anchor="middle"
                        >
                            {format!("{:.2}", bar.end_ms)}
                        </text>
                    </g>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="chart">
                <h4 class="chart-subtitle">{s.title.clone()}</h4>
                <svg class="histogram" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
                    {bars}
                </svg>
                <div class="chart-details">
                    <ul class="summary">
                        {s.summary.iter().map(|line| view! { <li>{line.clone()}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <table class="results-table">
                        <thead>
                            <tr>
                                <th>"Percentile"</th>
                                <th>"Latency"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {s.percentiles.iter().map(|p| view! {
                                <tr>
                                    <td>{format!("p{}", p.percentile)}</td>
                                    <td>{format!("{:.3} ms", p.value_ms)}</td>
                                </tr>
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    }
}
