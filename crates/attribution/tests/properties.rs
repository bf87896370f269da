use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use sarmad_attribution::Bisector;
use sarmad_corpus::{Corpus, Post};

fn corpus_from_offsets(offsets: &[i64]) -> Corpus {
    let base = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    offsets
        .iter()
        .enumerate()
        .map(|(i, minutes)| Post {
            id: format!("p{i:03}"),
            conversation_id: format!("p{i:03}"),
            author_id: "u1".to_string(),
            text: "مضاربة".to_string(),
            created_at: base + Duration::minutes(*minutes),
            has_media: false,
            is_source: false,
        })
        .collect()
}

proptest! {
    /// Whatever the timestamp distribution, bisection attributes the
    /// earliest matching post, shrinks monotonically, and respects the cap.
    #[test]
    fn bisection_attributes_the_earliest_post(
        offsets in prop::collection::vec(0i64..1440, 1..40)
    ) {
        let corpus = corpus_from_offsets(&offsets);
        let expected = corpus
            .iter()
            .min_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)))
            .unwrap()
            .id
            .clone();

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let result = rt.block_on(
            Bisector::default().run(&corpus, &["مضاربة".to_string()], None),
        );

        prop_assert!(result.found);
        prop_assert_eq!(result.source.unwrap().id, expected);
        prop_assert!(result.iterations <= 20);

        for pair in result.trace.windows(2) {
            let (prev, next) = (pair[0].window(), pair[1].window());
            prop_assert!(next.low >= prev.low && next.high <= prev.high);
            prop_assert!(next.duration() <= prev.duration() / 2 + Duration::seconds(1));
        }
    }
}
