#[cfg(test)]
mod verify {
    use rescale::parsing::{best_match, scan, PatternClass};

    #[test]
    fn longest_match_wins() {
        // "1" alone is a valid decimal match, but the slash fraction
        // covers more of the input and must govern.
        let found = best_match("1 1/2 cups").unwrap();
        assert_eq!(found.text, "1 1/2");
        assert_eq!(found.class, PatternClass::SlashFraction);
        assert_eq!((found.start, found.end), (0, 5));
    }

    #[test]
    fn position_does_not_beat_length() {
        // The shorter decimal "1" comes first in the text; the longer
        // fraction later still wins.
        let found = best_match("1 cup and 2 1/2 tsp").unwrap();
        assert_eq!(found.text, "2 1/2");
        assert_eq!(found.start, 10);
    }

    #[test]
    fn vulgar_fractions() {
        let found = best_match("½ lemon").unwrap();
        assert_eq!(found.text, "½");
        assert_eq!(found.class, PatternClass::VulgarFraction);

        let found = best_match("1½ onions").unwrap();
        assert_eq!(found.text, "1½");

        let found = best_match("1 ½ onions").unwrap();
        assert_eq!(found.text, "1 ½");
    }

    #[test]
    fn slash_fractions() {
        let found = best_match("1/2").unwrap();
        assert_eq!(found.class, PatternClass::SlashFraction);
        assert_eq!(found.text, "1/2");

        let found = best_match("1 / 2").unwrap();
        assert_eq!(found.text, "1 / 2");

        let found = best_match("1 1 / 2").unwrap();
        assert_eq!(found.text, "1 1 / 2");
    }

    #[test]
    fn decimal_conventions_disambiguate_by_length() {
        // Dot decimal separator, comma thousands grouping
        let found = best_match("1,000.25 g flour").unwrap();
        assert_eq!(found.text, "1,000.25");
        assert_eq!(found.class, PatternClass::DecimalPoint);

        // Comma decimal separator, dot thousands grouping
        let found = best_match("1.000,5 kg").unwrap();
        assert_eq!(found.text, "1.000,5");
        assert_eq!(found.class, PatternClass::DecimalComma);
    }

    #[test]
    fn the_word_half() {
        let found = best_match("Half a lemon").unwrap();
        assert_eq!(found.text, "Half");
        assert_eq!(found.class, PatternClass::HalfWord);

        let found = best_match("half").unwrap();
        assert_eq!(found.text, "half");
    }

    #[test]
    fn no_quantity_no_match() {
        assert!(best_match("").is_none());
        assert!(best_match("a pinch of salt").is_none());
        assert!(best_match("zero").is_none());
    }

    #[test]
    fn scan_enumerates_left_to_right() {
        let text = "2 1/2 cups sugar\n1 tsp vanilla\n300 g flour";
        let set = scan(text);

        assert_eq!(set.len(), 3);

        let tokens: Vec<_> = set
            .iter()
            .map(|(_, token)| token)
            .collect();

        assert_eq!(tokens[0].raw_text, "2 1/2");
        assert_eq!(tokens[0].baseline_value, 2.5);
        assert!(tokens[0].render_as_fraction);

        assert_eq!(tokens[1].raw_text, "1");
        assert_eq!(tokens[1].baseline_value, 1.0);
        assert!(tokens[1].render_as_fraction); // teaspoon context

        assert_eq!(tokens[2].raw_text, "300");
        assert_eq!(tokens[2].baseline_value, 300.0);
        assert!(!tokens[2].render_as_fraction);
    }

    #[test]
    fn scan_records_absolute_spans() {
        let text = "use 1½ lemons and 2 cups water";
        let set = scan(text);

        for (_, token) in set.iter() {
            let span = token.span;
            assert_eq!(&text[span.start..span.end], token.raw_text);
        }
    }

    #[test]
    fn scan_skips_what_it_cannot_normalize() {
        // Nothing here survives normalization or matching; the scan just
        // comes back empty rather than failing.
        let set = scan("no quantities at all");
        assert!(set.is_empty());
    }
}
