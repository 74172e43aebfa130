//! Typed slots per node shape.
//!
//! Every [`Tag`] maps to exactly one shape through [`Fields::for_tag`].
//! Several tags share a shape; the individual attributes and most
//! individual events, for example, are all [`IndividualEvent`]s.

use serde::Serialize;

use crate::node::NodeId;
use crate::structures::structure;
use crate::structures::AddressStructure;
use crate::structures::AssociationStructure;
use crate::structures::ChangeDate;
use crate::structures::ChildToFamilyLink;
use crate::structures::FamilyEventDetail;
use crate::structures::FamilyEventStructure;
use crate::structures::IndividualAttributeStructure;
use crate::structures::IndividualEventDetail;
use crate::structures::IndividualEventStructure;
use crate::structures::LdsIndividualOrdinance;
use crate::structures::LdsSpouseSealing;
use crate::structures::MultimediaLink;
use crate::structures::NoteStructure;
use crate::structures::PersonalNamePieces;
use crate::structures::PersonalNameStructure;
use crate::structures::SourceCitation;
use crate::structures::SourceRepositoryCitation;
use crate::structures::SpouseToFamilyLink;
use crate::structures::Structure;
use crate::tags::Kind;
use crate::tags::Tag;

structure! {
    /// The top-level records of a document.
    pub struct Records {
        many head: Head,
        many subm: Subm,
        many subn: Subn,
        many fam: Fam,
        many indi: Indi,
        many obje: Obje,
        many note: Note,
        many repo: Repo,
        many sour: Sour,
        many trlr: Trlr,
    }
}

structure! {
    pub struct Header {
        one sour: Sour,
        many dest: Dest,
        one date: Date,
        one subm: Subm,
        one subn: Subn,
        one file: File,
        one copr: Copr,
        one gedc: Gedc,
        one char: Char,
        one lang: Lang,
        one plac: Plac,
        one note: Note,
    }
}

structure! {
    /// A source record, a source citation, or the header's source system.
    pub struct Source {
        one vers: Vers,
        one name: Name,
        one corp: Corp,
        one data: Data,
        one page: Page,
        one even: Even,
        one quay: Quay,
        many lines: Cont | Conc,
        many text: Text,
        one auth: Auth,
        one titl: Titl,
        one abbr: Abbr,
        one publ: Publ,
        many refn: Refn,
        one rin: Rin,
        ..repositories: SourceRepositoryCitation,
        ..change: ChangeDate,
        ..notes: NoteStructure,
        ..media: MultimediaLink,
    }
}

structure! {
    pub struct PersonalName {
        one r#type: Type,
        many fone: Fone,
        many romn: Romn,
        ..pieces: PersonalNamePieces,
    }
}

structure! {
    pub struct Corporation {
        ..address: AddressStructure,
    }
}

structure! {
    pub struct Data {
        one date: Date,
        one copr: Copr,
        many text: Text,
        many even: Even,
        one agnc: Agnc,
        ..notes: NoteStructure,
    }
}

structure! {
    pub struct Date {
        one time: Time,
    }
}

structure! {
    /// Free text continued over `CONT`/`CONC` lines.
    pub struct Text {
        many lines: Cont | Conc,
    }
}

structure! {
    pub struct Submitter {
        one name: Name,
        many lang: Lang,
        one rfn: Rfn,
        one rin: Rin,
        ..address: AddressStructure,
        ..media: MultimediaLink,
        ..notes: NoteStructure,
        ..change: ChangeDate,
    }
}

structure! {
    pub struct Submission {
        one subm: Subm,
        one famf: Famf,
        one temp: Temp,
        one ance: Ance,
        one desc: Desc,
        one ordi: Ordi,
        one rin: Rin,
        ..notes: NoteStructure,
        ..change: ChangeDate,
    }
}

structure! {
    pub struct File {
        one form: Form,
        one titl: Titl,
    }
}

structure! {
    pub struct Gedc {
        one vers: Vers,
        one form: Form,
    }
}

structure! {
    pub struct Form {
        one medi: Medi,
        one r#type: Type,
    }
}

structure! {
    pub struct Charset {
        one vers: Vers,
    }
}

structure! {
    pub struct Place {
        one form: Form,
        many fone: Fone,
        many romn: Romn,
        one map: Map,
        ..notes: NoteStructure,
    }
}

structure! {
    pub struct Note {
        many lines: Cont | Conc,
        many refn: Refn,
        one rin: Rin,
        many sour: Sour,
        one chan: Chan,
    }
}

structure! {
    pub struct Family {
        one resn: Resn,
        one husb: Husb,
        one wife: Wife,
        many chil: Chil,
        one nchi: Nchi,
        many subm: Subm,
        many refn: Refn,
        one rin: Rin,
        ..events: FamilyEventStructure,
        ..sealings: LdsSpouseSealing,
        ..change: ChangeDate,
        ..notes: NoteStructure,
        ..sources: SourceCitation,
        ..media: MultimediaLink,
    }
}

structure! {
    /// `HUSB` or `WIFE`.
    pub struct Partner {
        one age: Age,
    }
}

structure! {
    pub struct Reference {
        one r#type: Type,
    }
}

structure! {
    pub struct Individual {
        one resn: Resn,
        one sex: Sex,
        many subm: Subm,
        many alia: Alia,
        many anci: Anci,
        many desi: Desi,
        one rfn: Rfn,
        one afn: Afn,
        many refn: Refn,
        one rin: Rin,
        ..names: PersonalNameStructure,
        ..events: IndividualEventStructure,
        ..attributes: IndividualAttributeStructure,
        ..ordinances: LdsIndividualOrdinance,
        ..families: ChildToFamilyLink,
        ..spouses: SpouseToFamilyLink,
        ..associations: AssociationStructure,
        ..change: ChangeDate,
        ..notes: NoteStructure,
        ..sources: SourceCitation,
        ..media: MultimediaLink,
    }
}

structure! {
    pub struct Object {
        many file: File,
        one titl: Titl,
        many refn: Refn,
        one rin: Rin,
        ..notes: NoteStructure,
        ..sources: SourceCitation,
        ..change: ChangeDate,
    }
}

structure! {
    /// `TITL` and `DSCR`: attributes whose value may continue.
    pub struct TextAttribute {
        many lines: Cont | Conc,
        ..detail: IndividualEventDetail,
    }
}

structure! {
    pub struct Repository {
        one name: Name,
        many refn: Refn,
        one rin: Rin,
        one caln: Caln,
        ..address: AddressStructure,
        ..notes: NoteStructure,
        ..change: ChangeDate,
    }
}

structure! {
    /// A generic `EVEN`.
    pub struct Event {
        one role: Role,
        one date: Date,
        one plac: Plac,
        one age: Age,
        ..detail: FamilyEventDetail,
    }
}

structure! {
    pub struct Address {
        many cont: Cont,
        one adr1: Adr1,
        one adr2: Adr2,
        one adr3: Adr3,
        one city: City,
        one stae: Stae,
        one post: Post,
        one ctry: Ctry,
    }
}

structure! {
    pub struct Association {
        one rela: Rela,
        many sour: Sour,
        many note: Note,
    }
}

structure! {
    pub struct Change {
        one date: Date,
        many note: Note,
    }
}

structure! {
    pub struct ChildLink {
        one pedi: Pedi,
        one stat: Stat,
        one adop: Adop,
        many note: Note,
    }
}

structure! {
    pub struct SpouseLink {
        ..notes: NoteStructure,
    }
}

structure! {
    pub struct Status {
        one date: Date,
    }
}

structure! {
    pub struct FamilyEvent {
        ..detail: FamilyEventDetail,
    }
}

structure! {
    pub struct IndividualEvent {
        ..detail: IndividualEventDetail,
    }
}

structure! {
    /// `CENS` and `RESI`, which occur under both individuals and families.
    pub struct Census {
        ..individual: IndividualEventDetail,
        ..family: FamilyEventDetail,
    }
}

structure! {
    /// `BIRT`, `CHR` and `ADOP`, which may name the family involved.
    pub struct Birth {
        one famc: Famc,
        ..detail: IndividualEventDetail,
    }
}

structure! {
    /// `BAPL`, `CONL` and `ENDL`.
    pub struct Ordinance {
        one date: Date,
        one temp: Temp,
        one plac: Plac,
        one stat: Stat,
        many note: Note,
        many sour: Sour,
    }
}

structure! {
    pub struct ChildSealing {
        one date: Date,
        one temp: Temp,
        one plac: Plac,
        one famc: Famc,
        one stat: Stat,
        many note: Note,
        many sour: Sour,
    }
}

structure! {
    pub struct SpouseSealing {
        one date: Date,
        one temp: Temp,
        one plac: Plac,
        one stat: Stat,
        ..notes: NoteStructure,
        ..sources: SourceCitation,
    }
}

structure! {
    /// `FONE` and `ROMN`.
    pub struct NameVariant {
        one r#type: Type,
        ..pieces: PersonalNamePieces,
    }
}

structure! {
    pub struct Map {
        one lati: Lati,
        one long: Long,
    }
}

structure! {
    pub struct CallNumber {
        one medi: Medi,
    }
}

macro_rules! fields {
    ($( $shape:ident, )+) => {
        /// The typed payload of a node.
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
        pub enum Fields {
            /// Shapes with no typed children, including unrecognized kinds.
            #[default]
            Leaf,
            $( $shape($shape), )+
        }

        impl Structure for Fields {
            fn accepts(&self, tag: Tag) -> bool {
                match self {
                    Fields::Leaf => false,
                    $( Fields::$shape(shape) => shape.accepts(tag), )+
                }
            }

            fn store(&mut self, tag: Tag, id: NodeId) -> bool {
                match self {
                    Fields::Leaf => false,
                    $( Fields::$shape(shape) => shape.store(tag, id), )+
                }
            }
        }
    };
}

fields! {
    Header,
    Source,
    PersonalName,
    Corporation,
    Data,
    Date,
    Text,
    Submitter,
    Submission,
    File,
    Gedc,
    Form,
    Charset,
    Place,
    Note,
    Family,
    Partner,
    Reference,
    Individual,
    Object,
    TextAttribute,
    Repository,
    Event,
    Address,
    Association,
    Change,
    ChildLink,
    SpouseLink,
    Status,
    FamilyEvent,
    IndividualEvent,
    Census,
    Birth,
    Ordinance,
    ChildSealing,
    SpouseSealing,
    NameVariant,
    Map,
    CallNumber,
}

impl Fields {
    /// The empty shape for a node of the given kind.
    #[must_use]
    pub fn for_kind(kind: &Kind) -> Self {
        match kind {
            Kind::Known(tag) => Self::for_tag(*tag),
            Kind::Unrecognized(_) => Fields::Leaf,
        }
    }

    #[must_use]
    pub fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::Head => Fields::Header(Header::default()),
            Tag::Sour => Fields::Source(Source::default()),
            Tag::Name => Fields::PersonalName(PersonalName::default()),
            Tag::Corp => Fields::Corporation(Corporation::default()),
            Tag::Data => Fields::Data(Data::default()),
            Tag::Date => Fields::Date(Date::default()),
            Tag::Copr | Tag::Auth | Tag::Publ | Tag::Text => Fields::Text(Text::default()),
            Tag::Subm => Fields::Submitter(Submitter::default()),
            Tag::Subn => Fields::Submission(Submission::default()),
            Tag::File => Fields::File(File::default()),
            Tag::Gedc => Fields::Gedc(Gedc::default()),
            Tag::Form => Fields::Form(Form::default()),
            Tag::Char => Fields::Charset(Charset::default()),
            Tag::Plac => Fields::Place(Place::default()),
            Tag::Note => Fields::Note(Note::default()),
            Tag::Fam => Fields::Family(Family::default()),
            Tag::Husb | Tag::Wife => Fields::Partner(Partner::default()),
            Tag::Refn => Fields::Reference(Reference::default()),
            Tag::Indi => Fields::Individual(Individual::default()),
            Tag::Obje => Fields::Object(Object::default()),
            Tag::Titl | Tag::Dscr => Fields::TextAttribute(TextAttribute::default()),
            Tag::Repo => Fields::Repository(Repository::default()),
            Tag::Even => Fields::Event(Event::default()),
            Tag::Addr => Fields::Address(Address::default()),
            Tag::Asso => Fields::Association(Association::default()),
            Tag::Chan => Fields::Change(Change::default()),
            Tag::Famc => Fields::ChildLink(ChildLink::default()),
            Tag::Fams => Fields::SpouseLink(SpouseLink::default()),
            Tag::Stat => Fields::Status(Status::default()),
            Tag::Anul
            | Tag::Div
            | Tag::Divf
            | Tag::Enga
            | Tag::Marb
            | Tag::Marc
            | Tag::Marr
            | Tag::Marl
            | Tag::Mars => Fields::FamilyEvent(FamilyEvent::default()),
            Tag::Cens | Tag::Resi => Fields::Census(Census::default()),
            Tag::Birt | Tag::Chr | Tag::Adop => Fields::Birth(Birth::default()),
            Tag::Nchi
            | Tag::Reli
            | Tag::Cast
            | Tag::Educ
            | Tag::Idno
            | Tag::Nati
            | Tag::Nmr
            | Tag::Occu
            | Tag::Prop
            | Tag::Ssn
            | Tag::Fact
            | Tag::Deat
            | Tag::Buri
            | Tag::Crem
            | Tag::Bapm
            | Tag::Barm
            | Tag::Basm
            | Tag::Bles
            | Tag::Chra
            | Tag::Conf
            | Tag::Fcom
            | Tag::Ordn
            | Tag::Natu
            | Tag::Emig
            | Tag::Immi
            | Tag::Prob
            | Tag::Will
            | Tag::Grad
            | Tag::Reti => Fields::IndividualEvent(IndividualEvent::default()),
            Tag::Bapl | Tag::Conl | Tag::Endl => Fields::Ordinance(Ordinance::default()),
            Tag::Slgc => Fields::ChildSealing(ChildSealing::default()),
            Tag::Slgs => Fields::SpouseSealing(SpouseSealing::default()),
            Tag::Fone | Tag::Romn => Fields::NameVariant(NameVariant::default()),
            Tag::Map => Fields::Map(Map::default()),
            Tag::Caln => Fields::CallNumber(CallNumber::default()),
            Tag::Trlr
            | Tag::Vers
            | Tag::Cont
            | Tag::Conc
            | Tag::Dest
            | Tag::Time
            | Tag::Lang
            | Tag::Resn
            | Tag::Chil
            | Tag::Type
            | Tag::Rin
            | Tag::Sex
            | Tag::Alia
            | Tag::Anci
            | Tag::Desi
            | Tag::Rfn
            | Tag::Afn
            | Tag::Agnc
            | Tag::Abbr
            | Tag::Famf
            | Tag::Temp
            | Tag::Ordi
            | Tag::Adr1
            | Tag::Adr2
            | Tag::Adr3
            | Tag::City
            | Tag::Stae
            | Tag::Post
            | Tag::Ctry
            | Tag::Phon
            | Tag::Email
            | Tag::Fax
            | Tag::Www
            | Tag::Rela
            | Tag::Pedi
            | Tag::Caus
            | Tag::Age
            | Tag::Medi
            | Tag::Npfx
            | Tag::Givn
            | Tag::Nick
            | Tag::Spfx
            | Tag::Surn
            | Tag::Nsfx
            | Tag::Lati
            | Tag::Long
            | Tag::Role
            | Tag::Quay
            | Tag::Page
            | Tag::Ance
            | Tag::Desc => Fields::Leaf,
        }
    }

    /// The typed `DATE` child of any dated shape.
    #[must_use]
    pub fn date(&self) -> Option<NodeId> {
        match self {
            Fields::Header(header) => header.date,
            Fields::Data(data) => data.date,
            Fields::Event(event) => event.date.or(event.detail.detail.date),
            Fields::Change(change) => change.date,
            Fields::Status(status) => status.date,
            Fields::FamilyEvent(event) => event.detail.detail.date,
            Fields::IndividualEvent(event) => event.detail.detail.date,
            Fields::TextAttribute(attribute) => attribute.detail.detail.date,
            Fields::Census(census) => census.individual.detail.date,
            Fields::Birth(birth) => birth.detail.detail.date,
            Fields::Ordinance(ordinance) => ordinance.date,
            Fields::ChildSealing(sealing) => sealing.date,
            Fields::SpouseSealing(sealing) => sealing.date,
            _ => None,
        }
    }

    /// The `FAMC` children of an individual.
    #[must_use]
    pub fn child_families(&self) -> &[NodeId] {
        match self {
            Fields::Individual(individual) => &individual.families.famc,
            _ => &[],
        }
    }
}
