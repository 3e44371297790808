//! Invariants of the alphabet map and the counting table under arbitrary input.

use proptest::prelude::*;
use trent::alphabet::{classify, fold, NUL};
use trent::report::ReportRenderer;
use trent::config::{Encoding, LineEnding};
use trent::StreamScanner;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_classify_and_fold_agree(b in any::<u8>()) {
        prop_assert_eq!(classify(b).is_none(), fold(b) == NUL);
        if let Some(i) = classify(b) {
            prop_assert!(i < 29);
            prop_assert_eq!(classify(fold(b)), Some(i));
        }
    }

    #[test]
    fn prop_totals_match_cells(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut s = StreamScanner::new();
        for (n, &b) in data.iter().enumerate() {
            s.feed(b);
            if n % 64 == 0 {
                let t = s.table();
                prop_assert_eq!(t.letter_counts().iter().sum::<u64>(), t.total_letters());
                prop_assert_eq!(t.pair_counts().iter().sum::<u64>(), t.total_pairs());
            }
        }
        let t = s.table();
        prop_assert_eq!(s.bytes_read(), data.len() as u64);
        prop_assert_eq!(t.letter_counts().iter().sum::<u64>(), t.total_letters());
        prop_assert_eq!(t.pair_counts().iter().sum::<u64>(), t.total_pairs());
        prop_assert_eq!(t.triplet_counts().iter().sum::<u64>(), t.total_triplets());
        prop_assert!(t.total_triplets() <= t.total_pairs());
        prop_assert!(t.total_pairs() <= t.total_letters());
    }

    #[test]
    fn prop_entropy_bounded(data in "[a-zçğıöşü ]{0,200}") {
        // map the UTF-8 test string down to Latin-5 bytes
        let bytes: Vec<u8> = data.chars().map(|c| match c {
            'ç' => 0xe7, 'ğ' => 0xf0, 'ı' => 0xfd, 'ö' => 0xf6, 'ş' => 0xfe, 'ü' => 0xfc,
            c => c as u8,
        }).collect();
        let mut s = StreamScanner::new();
        s.feed_all(&bytes);
        let t = s.table();
        if let Some(h) = trent::entropy_order0(t) {
            prop_assert!(h >= 0.0 && h <= 29f64.log2() + 1e-9);
        }
        if let Some(h) = trent::entropy_order1(t) {
            prop_assert!(h >= 0.0 && h <= 2.0 * 29f64.log2() + 1e-9);
        }
    }

    #[test]
    fn prop_mono_render_repeatable(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut s = StreamScanner::new();
        s.feed_all(&data);
        let summary = s.finish("p");
        let r = ReportRenderer::new(&summary, Encoding::Latin5, LineEnding::Crlf);
        let (mut a, mut b) = (Vec::new(), Vec::new());
        r.render_mono(&mut a).unwrap();
        r.render_mono(&mut b).unwrap();
        prop_assert_eq!(a, b);
    }
}
