//! Random "did you mean ..." name jokes.

use rand::{Rng, seq::SliceRandom};

use crate::base::phrases::{FIRST_NAMES, LAST_NAMES, NAME_JOKE_TEMPLATES};

/// Builds a random name joke using the given source of randomness.
///
/// First name, last name and template are drawn independently.
pub fn random_name_joke<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first_name = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
    let last_name = LAST_NAMES.choose(rng).copied().unwrap_or_default();
    let template = NAME_JOKE_TEMPLATES.choose(rng).copied().unwrap_or_default();

    render(template, first_name, last_name)
}

/// Fills a joke template with a first and last name.
pub fn render(template: &str, first_name: &str, last_name: &str) -> String {
    let name = format!("{first_name} {last_name}");

    template.replace("{name}", &name).replace("{lastname}", last_name)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn render_fills_both_placeholders() {
        assert_eq!(render("The name's {lastname}. {name}.", "Bumblebee", "Cuttlefish"), "The name's Cuttlefish. Bumblebee Cuttlefish.");
    }

    #[test]
    fn jokes_are_built_from_the_fixed_lists() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let joke = random_name_joke(&mut rng);

            assert!(!joke.contains('{'), "unsubstituted placeholder in {joke}");
            assert!(FIRST_NAMES.iter().any(|f| joke.contains(&format!("{f} "))), "no first name in {joke}");
            assert!(LAST_NAMES.iter().any(|l| joke.contains(l)), "no last name in {joke}");
        }
    }

    #[test]
    fn every_template_mentions_a_name() {
        for template in NAME_JOKE_TEMPLATES {
            assert!(template.contains("{name}") || template.contains("{lastname}"));
        }
    }
}
