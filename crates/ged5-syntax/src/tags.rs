//! The fixed tag catalog.
//!
//! Every tag the parser knows is listed exactly once in the `tags!` table
//! below. The macro expands the table into the [`Tag`] enum, the
//! [`Tag::ALL`] slice and the two directions of the text mapping, so adding
//! a tag is a one-line change and every `match` over [`Tag`] stays
//! exhaustive.

use std::fmt;

use serde::Serialize;

macro_rules! tags {
    ($( $(#[$meta:meta])* $variant:ident => $text:literal, )+) => {
        /// A known GEDCOM tag.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum Tag {
            $( $(#[$meta])* $variant, )+
        }

        impl Tag {
            /// Every known tag, in catalog order.
            pub const ALL: &'static [Tag] = &[ $( Tag::$variant, )+ ];

            /// The wire spelling of the tag.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Tag::$variant => $text, )+
                }
            }

            /// Exact, case-sensitive lookup of wire text.
            #[must_use]
            pub fn lookup(text: &str) -> Option<Tag> {
                match text {
                    $( $text => Some(Tag::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

tags! {
    // Records
    /// Header record
    Head => "HEAD",
    /// Individual record
    Indi => "INDI",
    /// Family record
    Fam => "FAM",
    /// Multimedia object
    Obje => "OBJE",
    Note => "NOTE",
    /// Repository record
    Repo => "REPO",
    Sour => "SOUR",
    /// Submission record
    Subn => "SUBN",
    /// Submitter record
    Subm => "SUBM",
    /// Trailer, the last record of every file
    Trlr => "TRLR",

    // Header and metadata
    Vers => "VERS",
    Name => "NAME",
    /// Corporation
    Corp => "CORP",
    Data => "DATA",
    Date => "DATE",
    /// Copyright
    Copr => "COPR",
    /// Continuation on a new line
    Cont => "CONT",
    /// Concatenation onto the current line
    Conc => "CONC",
    /// Destination system
    Dest => "DEST",
    Time => "TIME",
    File => "FILE",
    /// GEDCOM format block
    Gedc => "GEDC",
    Form => "FORM",
    /// Character set
    Char => "CHAR",
    Lang => "LANG",
    /// Place
    Plac => "PLAC",

    // Family and individual links
    /// Restriction notice
    Resn => "RESN",
    /// Husband
    Husb => "HUSB",
    Wife => "WIFE",
    /// Child
    Chil => "CHIL",
    /// Children count
    Nchi => "NCHI",
    /// User reference number
    Refn => "REFN",
    Type => "TYPE",
    /// Automated record id
    Rin => "RIN",
    Sex => "SEX",
    /// Alias
    Alia => "ALIA",
    /// Ancestor interest
    Anci => "ANCI",
    /// Descendant interest
    Desi => "DESI",
    /// Permanent record file number
    Rfn => "RFN",
    /// Ancestral file number
    Afn => "AFN",
    /// Title
    Titl => "TITL",
    /// Generic event
    Even => "EVEN",
    /// Responsible agency
    Agnc => "AGNC",
    /// Originator
    Auth => "AUTH",
    /// Abbreviation
    Abbr => "ABBR",
    /// Publication facts
    Publ => "PUBL",
    Text => "TEXT",
    /// Family file
    Famf => "FAMF",
    /// Temple code
    Temp => "TEMP",
    /// Ordinance process flag
    Ordi => "ORDI",

    // Address structure
    Addr => "ADDR",
    Adr1 => "ADR1",
    Adr2 => "ADR2",
    Adr3 => "ADR3",
    City => "CITY",
    /// State
    Stae => "STAE",
    /// Postal code
    Post => "POST",
    /// Country
    Ctry => "CTRY",
    /// Phone
    Phon => "PHON",
    Email => "EMAIL",
    Fax => "FAX",
    Www => "WWW",

    // Associations and links
    /// Association
    Asso => "ASSO",
    /// Relationship
    Rela => "RELA",
    /// Change date
    Chan => "CHAN",
    /// Child to family link
    Famc => "FAMC",
    /// Pedigree linkage
    Pedi => "PEDI",
    /// Status
    Stat => "STAT",
    /// Religion
    Reli => "RELI",
    /// Cause
    Caus => "CAUS",

    // Family events
    /// Annulment
    Anul => "ANUL",
    /// Census
    Cens => "CENS",
    /// Divorce
    Div => "DIV",
    /// Divorce filed
    Divf => "DIVF",
    /// Engagement
    Enga => "ENGA",
    /// Marriage bann
    Marb => "MARB",
    /// Marriage contract
    Marc => "MARC",
    /// Marriage
    Marr => "MARR",
    /// Marriage licence
    Marl => "MARL",
    /// Marriage settlement
    Mars => "MARS",

    // Individual attributes
    /// Caste
    Cast => "CAST",
    /// Physical description
    Dscr => "DSCR",
    /// Education
    Educ => "EDUC",
    /// National id number
    Idno => "IDNO",
    /// Nationality
    Nati => "NATI",
    /// Marriage count
    Nmr => "NMR",
    /// Occupation
    Occu => "OCCU",
    /// Possessions
    Prop => "PROP",
    /// Residence
    Resi => "RESI",
    /// Social security number
    Ssn => "SSN",
    Fact => "FACT",
    Age => "AGE",

    // Individual events
    /// Birth
    Birt => "BIRT",
    /// Christening
    Chr => "CHR",
    /// Death
    Deat => "DEAT",
    /// Burial
    Buri => "BURI",
    /// Cremation
    Crem => "CREM",
    /// Adoption
    Adop => "ADOP",
    /// Baptism
    Bapm => "BAPM",
    /// Bar mitzvah
    Barm => "BARM",
    /// Bas mitzvah
    Basm => "BASM",
    /// Blessing
    Bles => "BLES",
    /// Adult christening
    Chra => "CHRA",
    /// Confirmation
    Conf => "CONF",
    /// First communion
    Fcom => "FCOM",
    /// Ordination
    Ordn => "ORDN",
    /// Naturalization
    Natu => "NATU",
    /// Emigration
    Emig => "EMIG",
    /// Immigration
    Immi => "IMMI",
    /// Probate
    Prob => "PROB",
    Will => "WILL",
    /// Graduation
    Grad => "GRAD",
    /// Retirement
    Reti => "RETI",

    // LDS ordinances
    /// LDS baptism
    Bapl => "BAPL",
    /// LDS confirmation
    Conl => "CONL",
    /// LDS endowment
    Endl => "ENDL",
    /// LDS child sealing
    Slgc => "SLGC",
    /// LDS spouse sealing
    Slgs => "SLGS",

    // Names, places, citations
    /// Media type
    Medi => "MEDI",
    /// Name prefix
    Npfx => "NPFX",
    /// Given name
    Givn => "GIVN",
    /// Nickname
    Nick => "NICK",
    /// Surname prefix
    Spfx => "SPFX",
    /// Surname
    Surn => "SURN",
    /// Name suffix
    Nsfx => "NSFX",
    /// Phonetic variation
    Fone => "FONE",
    /// Romanized variation
    Romn => "ROMN",
    Map => "MAP",
    /// Latitude
    Lati => "LATI",
    /// Longitude
    Long => "LONG",
    Role => "ROLE",
    /// Certainty assessment
    Quay => "QUAY",
    /// Call number
    Caln => "CALN",
    Page => "PAGE",
    /// Spouse to family link
    Fams => "FAMS",
    /// Generations of ancestors
    Ance => "ANCE",
    /// Generations of descendants
    Desc => "DESC",
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a parsed node: a catalog tag, or the raw text of a tag the
/// catalog does not know.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    Known(Tag),
    Unrecognized(String),
}

impl Kind {
    #[must_use]
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Kind::Known(tag) => Some(*tag),
            Kind::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Known(tag) => tag.as_str(),
            Kind::Unrecognized(text) => text,
        }
    }

    #[must_use]
    pub fn is(&self, tag: Tag) -> bool {
        self.tag() == Some(tag)
    }
}

impl From<Tag> for Kind {
    fn from(tag: Tag) -> Self {
        Kind::Known(tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
