use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::quiz::bmi::{bmi, format_bmi};
use crate::quiz::session::{HEIGHT_MAX_CM, HEIGHT_MIN_CM, WEIGHT_MAX_KG, WEIGHT_MIN_KG};

#[derive(Properties, PartialEq)]
pub struct BmiCalculatorProps {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub on_height: Callback<f64>,
    pub on_weight: Callback<f64>,
}

/// Height/weight sliders with a live BMI preview. The slider bounds
/// are the only validation the inputs get.
#[function_component(BmiCalculator)]
pub fn bmi_calculator(props: &BmiCalculatorProps) -> Html {
    let on_height_input = {
        let on_height = props.on_height.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                on_height.emit(value);
            }
        })
    };

    let on_weight_input = {
        let on_weight = props.on_weight.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                on_weight.emit(value);
            }
        })
    };

    html! {
        <div class="bmi-calculator">
            <label class="bmi-slider-label">
                {format!("Altura: {:.0} cm", props.height_cm)}
                <input
                    type="range"
                    min={HEIGHT_MIN_CM.to_string()}
                    max={HEIGHT_MAX_CM.to_string()}
                    value={props.height_cm.to_string()}
                    oninput={on_height_input}
                />
            </label>
            <label class="bmi-slider-label">
                {format!("Peso: {:.0} kg", props.weight_kg)}
                <input
                    type="range"
                    min={WEIGHT_MIN_KG.to_string()}
                    max={WEIGHT_MAX_KG.to_string()}
                    value={props.weight_kg.to_string()}
                    oninput={on_weight_input}
                />
            </label>
            <p class="bmi-preview">
                {format!("IMC atual: {}", format_bmi(bmi(props.height_cm, props.weight_kg)))}
            </p>
        </div>
    }
}
