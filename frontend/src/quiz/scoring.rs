/// Score as a percentage. A zero total means the parameters are
/// invalid, not that the score is zero, so the caller gets `None`
/// instead of a division result.
pub fn percentage(correct: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(correct as f64 / total as f64 * 100.0)
}

/// Canned advice used when the advice service is unreachable or
/// returns garbage. Same three bands and copy the funnel has always
/// shipped.
pub fn fallback_advice(score: f64) -> &'static str {
    if score >= 80.0 {
        "Parabéns! Você tem um ótimo conhecimento sobre o assunto. Continue assim e explore dicas avançadas para otimizar ainda mais seus resultados."
    } else if score >= 50.0 {
        "Você está no caminho certo! Continue estudando os materiais para aprimorar seus conhecimentos e melhorar seus resultados."
    } else {
        "Não desanime! Reveja os conceitos básicos e tente novamente. A jornada para uma vida mais saudável é um processo contínuo de aprendizado."
    }
}
