use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Keyword image to token kind. Multi-word keywords appear with
    /// single spaces between words; scanners are expected to fold them
    /// into one token by longest match.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("HAI", TokenKind::Hai);
        map.insert("KTHXBYE", TokenKind::Kthxbye);
        map.insert("VISIBLE", TokenKind::Visible);
        map.insert("!", TokenKind::Bang);
        map.insert("GIMMEH", TokenKind::Gimmeh);
        map.insert("R", TokenKind::R);
        map.insert("ITZ", TokenKind::Itz);
        map.insert("ITZ A", TokenKind::ItzA);
        map.insert("HAS A", TokenKind::HasA);
        map.insert("IS NOW A", TokenKind::IsNowA);
        map.insert("R NOOB", TokenKind::RNoob);
        map.insert("O RLY?", TokenKind::Orly);
        map.insert("YA RLY", TokenKind::Yarly);
        map.insert("MEBBE", TokenKind::Mebbe);
        map.insert("NO WAI", TokenKind::Nowai);
        map.insert("OIC", TokenKind::Oic);
        map.insert("WTF?", TokenKind::Wtf);
        map.insert("OMG", TokenKind::Omg);
        map.insert("OMGWTF", TokenKind::Omgwtf);
        map.insert("GTFO", TokenKind::Gtfo);
        map.insert("FOUND YR", TokenKind::FoundYr);
        map.insert("IM IN YR", TokenKind::ImInYr);
        map.insert("IM OUTTA YR", TokenKind::ImOuttaYr);
        map.insert("UPPIN", TokenKind::Uppin);
        map.insert("NERFIN", TokenKind::Nerfin);
        map.insert("TIL", TokenKind::Til);
        map.insert("WILE", TokenKind::Wile);
        map.insert("YR", TokenKind::Yr);
        map.insert("AN YR", TokenKind::AnYr);
        map.insert("AN", TokenKind::An);
        map.insert("HOW IZ", TokenKind::HowIz);
        map.insert("IF U SAY SO", TokenKind::IfUSaySo);
        map.insert("IZ", TokenKind::Iz);
        map.insert("MKAY", TokenKind::Mkay);
        map.insert("MAEK", TokenKind::Maek);
        map.insert("A", TokenKind::A);
        map.insert("IT", TokenKind::It);
        map.insert("NOT", TokenKind::Not);
        map.insert("SMOOSH", TokenKind::Smoosh);
        map.insert("ALL OF", TokenKind::AllOf);
        map.insert("ANY OF", TokenKind::AnyOf);
        map.insert("SUM OF", TokenKind::SumOf);
        map.insert("DIFF OF", TokenKind::DiffOf);
        map.insert("PRODUKT OF", TokenKind::ProduktOf);
        map.insert("QUOSHUNT OF", TokenKind::QuoshuntOf);
        map.insert("MOD OF", TokenKind::ModOf);
        map.insert("BIGGR OF", TokenKind::BiggrOf);
        map.insert("SMALLR OF", TokenKind::SmallrOf);
        map.insert("BOTH OF", TokenKind::BothOf);
        map.insert("EITHER OF", TokenKind::EitherOf);
        map.insert("WON OF", TokenKind::WonOf);
        map.insert("BOTH SAEM", TokenKind::BothSaem);
        map.insert("DIFFRINT", TokenKind::Diffrint);
        map.insert("WIN", TokenKind::Boolean);
        map.insert("FAIL", TokenKind::Boolean);
        map.insert("NOOB", TokenKind::Noob);
        map.insert("TROOF", TokenKind::Troof);
        map.insert("NUMBR", TokenKind::Numbr);
        map.insert("NUMBAR", TokenKind::Numbar);
        map.insert("YARN", TokenKind::Yarn);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Identifier,
    Boolean,
    Integer,
    Float,
    String,

    // Program frame
    Hai,
    Kthxbye,

    // Statements
    Visible,
    Bang, // !
    Gimmeh,
    R,
    Itz,
    ItzA,
    HasA,
    IsNowA,
    RNoob,
    Orly,
    Yarly,
    Mebbe,
    Nowai,
    Oic,
    Wtf,
    Omg,
    Omgwtf,
    Gtfo,
    FoundYr,
    ImInYr,
    ImOuttaYr,
    Uppin,
    Nerfin,
    Til,
    Wile,
    HowIz,
    IfUSaySo,

    // Expressions
    Yr,
    AnYr,
    An,
    Iz,
    Mkay,
    Maek,
    A,
    It,
    Not,
    Smoosh,
    AllOf,
    AnyOf,
    SumOf,
    DiffOf,
    ProduktOf,
    QuoshuntOf,
    ModOf,
    BiggrOf,
    SmallrOf,
    BothOf,
    EitherOf,
    WonOf,
    BothSaem,
    Diffrint,

    // Types
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.value)
    }
}

impl Token {
    /// True for kinds whose `value` carries a payload rather than a
    /// fixed keyword image.
    pub fn has_payload(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier
                | TokenKind::Boolean
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
        )
    }
}
