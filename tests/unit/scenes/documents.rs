use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn cards_enter_three_frames_apart() {
    let state = sample(3, fps30()).unwrap();
    assert!(state.cards[0].opacity > 0.0);
    assert_eq!(state.cards[1].opacity, 0.0);
    assert_eq!(state.cards[1].offset_y, ENTRANCE_RISE);
    assert_eq!(state.cards[2].opacity, 0.0);

    let later = sample(7, fps30()).unwrap();
    assert_eq!(later.cards[0].opacity, 7.0 / 8.0);
    assert_eq!(later.cards[1].opacity, 4.0 / 8.0);
    assert_eq!(later.cards[2].opacity, 1.0 / 8.0);
}

#[test]
fn card_opacity_clamps_after_eight_frames() {
    let state = sample(19, fps30()).unwrap();
    for card in state.cards {
        assert_eq!(card.opacity, 1.0);
        assert!(card.offset_y.abs() < ENTRANCE_RISE);
    }
}

#[test]
fn group_exits_upward_from_frame_twenty() {
    assert_eq!(sample(0, fps30()).unwrap().exit_offset_y, 0.0);
    assert_eq!(sample(20, fps30()).unwrap().exit_offset_y, 0.0);
    let mid = sample(25, fps30()).unwrap().exit_offset_y;
    // Ease-in: only an eighth of the way at the halfway point.
    assert!((mid + 50.0).abs() < 1e-9);
    assert_eq!(sample(30, fps30()).unwrap().exit_offset_y, -400.0);
    assert_eq!(sample(44, fps30()).unwrap().exit_offset_y, -400.0);
}

#[test]
fn tree_lists_every_document() {
    let node = sample(12, fps30()).unwrap().to_node();
    let cards = node.find("cards").unwrap();
    assert_eq!(cards.children().len(), DOCUMENTS.len());
    let names: Vec<_> = cards
        .children()
        .iter()
        .map(|c| c.find("name").unwrap().text_content().unwrap())
        .collect();
    assert_eq!(
        names,
        ["sales_deck.pdf", "annual_report.xlsx", "consult_notes.doc"]
    );
    assert_eq!(
        node.find("card_1").unwrap().find("status").unwrap().text_content(),
        Some("Analyzing...")
    );
}
