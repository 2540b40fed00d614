use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::history::History;

const CHART_ID: &str = "cost-chart";

#[derive(Properties, PartialEq)]
pub struct CostChartProps {
    pub history: Rc<History>,
}

#[function_component(CostChart)]
pub fn cost_chart(props: &CostChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.history.clone(), |history| history.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with((series_data, container_ref), |(series_data, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, series_data);

                let series_data = series_data.clone();
                EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                    render_chart(&container, &series_data);
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    CharmingChart::new()
        .title(
            Title::new()
                .text("24-Hour Cost History")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
                // Full date-time on hover; the axis only shows hour:minute
                .formatter(JsFunction::new_with_args(
                    "params",
                    "var p = params[0]; return p.name + '<br/>Cost: $' + Number(p.value).toFixed(2);",
                )),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(
                    AxisLabel::new()
                        .color("#6b7280")
                        .formatter(JsFunction::new_with_args("value", "return value.slice(11);")),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("$/hour")
                .axis_label(AxisLabel::new().color("#6b7280").formatter("${value}"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .data(y_data.clone())
                .smooth(0.5)
                .show_symbol(false)
                .line_style(LineStyle::new().color("#3b82f6").width(2.0)),
        )
}
