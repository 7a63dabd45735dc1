//! Unit tests for the token vocabulary.

use std::rc::Rc;

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};
use crate::{Position, MK_TOKEN};

#[test]
fn test_multi_word_keywords_fold_to_single_kinds() {
    assert_eq!(KEYWORD_LOOKUP.get("IS NOW A"), Some(&TokenKind::IsNowA));
    assert_eq!(KEYWORD_LOOKUP.get("HAS A"), Some(&TokenKind::HasA));
    assert_eq!(KEYWORD_LOOKUP.get("R NOOB"), Some(&TokenKind::RNoob));
    assert_eq!(KEYWORD_LOOKUP.get("IM IN YR"), Some(&TokenKind::ImInYr));
    assert_eq!(KEYWORD_LOOKUP.get("IM OUTTA YR"), Some(&TokenKind::ImOuttaYr));
    assert_eq!(KEYWORD_LOOKUP.get("HOW IZ"), Some(&TokenKind::HowIz));
    assert_eq!(KEYWORD_LOOKUP.get("IF U SAY SO"), Some(&TokenKind::IfUSaySo));
    assert_eq!(KEYWORD_LOOKUP.get("FOUND YR"), Some(&TokenKind::FoundYr));
    assert_eq!(KEYWORD_LOOKUP.get("SUM OF"), Some(&TokenKind::SumOf));
    assert_eq!(KEYWORD_LOOKUP.get("BOTH SAEM"), Some(&TokenKind::BothSaem));
    assert_eq!(KEYWORD_LOOKUP.get("AN YR"), Some(&TokenKind::AnYr));
    assert_eq!(KEYWORD_LOOKUP.get("ITZ A"), Some(&TokenKind::ItzA));
    assert_eq!(KEYWORD_LOOKUP.get("O RLY?"), Some(&TokenKind::Orly));
    assert_eq!(KEYWORD_LOOKUP.get("YA RLY"), Some(&TokenKind::Yarly));
    assert_eq!(KEYWORD_LOOKUP.get("NO WAI"), Some(&TokenKind::Nowai));
}

#[test]
fn test_boolean_images_share_one_kind() {
    assert_eq!(KEYWORD_LOOKUP.get("WIN"), Some(&TokenKind::Boolean));
    assert_eq!(KEYWORD_LOOKUP.get("FAIL"), Some(&TokenKind::Boolean));
}

#[test]
fn test_payload_kinds() {
    let position = Position(1, Rc::new(String::from("test.lol")));
    let name = MK_TOKEN!(TokenKind::Identifier, String::from("X"), position.clone());
    let keyword = MK_TOKEN!(TokenKind::Kthxbye, String::from("KTHXBYE"), position);

    assert!(name.has_payload());
    assert!(!keyword.has_payload());
}

#[test]
fn test_token_display() {
    let position = Position(1, Rc::new(String::from("test.lol")));
    let token = MK_TOKEN!(TokenKind::Integer, String::from("42"), position);

    assert_eq!(token.to_string(), "Integer (\"42\")");
}
