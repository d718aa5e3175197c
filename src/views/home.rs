// src/views/home.rs
use super::{components, layout};

/// Landing page: hero, problem, solution, technology strip, explainers.
pub fn render() -> String {
    let body = [
        components::NAVBAR,
        components::HERO,
        components::PROBLEM,
        components::SOLUTION,
        components::TECH_STACK,
        components::LEARN_MORE,
        components::FOOTER,
    ]
    .concat();

    layout::page("QCaaS | Quantum-Enhanced Classification as a Service", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_carries_the_marketing_sections() {
        let html = render();
        assert!(html.contains("Welcome to"));
        assert!(html.contains("Quantum-Enhanced Classification as a Service"));
        assert!(html.contains("The Quantum Wall"));
        assert!(html.contains("Your Personal Quantum Sandbox"));
        assert!(html.contains("A Glimpse Under the Hood"));
        assert!(html.contains(r#"href="/experiment""#));
    }
}
