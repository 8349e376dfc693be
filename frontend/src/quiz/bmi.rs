/// Body mass index from slider inputs. The widgets pre-clamp both
/// values, so no validation happens here.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn format_bmi(value: f64) -> String {
    format!("{:.2}", value)
}

/// WHO bands used by the result screen's copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi < 25.0 {
            BmiBand::Normal
        } else if bmi < 30.0 {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Abaixo do peso",
            BmiBand::Normal => "Peso normal",
            BmiBand::Overweight => "Sobrepeso",
            BmiBand::Obese => "Obesidade",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BmiBand::Underweight => {
                "Seu IMC está abaixo da faixa saudável. Foque em uma alimentação nutritiva e equilibrada."
            }
            BmiBand::Normal => {
                "Seu IMC está na faixa saudável. O protocolo te ajuda a manter o resultado sem dietas malucas."
            }
            BmiBand::Overweight => {
                "Seu IMC indica sobrepeso. O protocolo foi desenhado exatamente para acelerar a queima de gordura no seu caso."
            }
            BmiBand::Obese => {
                "Seu IMC indica obesidade. Milhares de pessoas na mesma faixa já destravaram o emagrecimento com o protocolo."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_formats_to_two_decimals() {
        assert_eq!(format_bmi(bmi(170.0, 70.0)), "24.22");
    }

    #[test]
    fn bmi_of_square_height() {
        let value = bmi(200.0, 80.0);
        assert!((value - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bands_split_at_who_thresholds() {
        assert_eq!(BmiBand::classify(18.4), BmiBand::Underweight);
        assert_eq!(BmiBand::classify(18.5), BmiBand::Normal);
        assert_eq!(BmiBand::classify(24.99), BmiBand::Normal);
        assert_eq!(BmiBand::classify(25.0), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(29.99), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(30.0), BmiBand::Obese);
    }
}
