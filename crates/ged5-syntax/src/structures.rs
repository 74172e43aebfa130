//! Reusable sub-structures.
//!
//! A sub-structure is a bundle of typed slots plus the contract saying which
//! child tags it takes. Node shapes in [`crate::fields`] are built from the
//! same [`structure!`] macro, embedding these bundles after their own slots.

use crate::node::NodeId;
use crate::tags::Tag;

/// Accept-and-store contract shared by every bundle and node shape.
pub trait Structure {
    /// Whether a child of this kind has a typed slot.
    fn accepts(&self, tag: Tag) -> bool;

    /// Stores `id` in the first slot that takes `tag`. Own slots are tried
    /// before embedded bundles, bundles in declaration order.
    fn store(&mut self, tag: Tag, id: NodeId) -> bool;
}

macro_rules! slot {
    (one) => { Option<$crate::node::NodeId> };
    (many) => { Vec<$crate::node::NodeId> };
}

macro_rules! put {
    (one, $slot:expr, $id:expr) => {
        $slot = Some($id)
    };
    (many, $slot:expr, $id:expr) => {
        $slot.push($id)
    };
}

/// Declares a struct of slots and implements [`Structure`] for it.
///
/// `one` slots keep the last child stored, `many` slots keep every child in
/// arrival order, and `..name: Bundle` embeds another structure.
macro_rules! structure {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $card:ident $field:ident: $($tag:ident)|+, )*
            $( ..$bundle:ident: $bty:ident, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, ::serde::Serialize)]
        pub struct $name {
            $( pub $field: $crate::structures::slot!($card), )*
            $( pub $bundle: $bty, )*
        }

        impl $crate::structures::Structure for $name {
            fn accepts(&self, tag: $crate::tags::Tag) -> bool {
                $(
                    if matches!(tag, $($crate::tags::Tag::$tag)|+) {
                        return true;
                    }
                )*
                $(
                    if $crate::structures::Structure::accepts(&self.$bundle, tag) {
                        return true;
                    }
                )*
                false
            }

            fn store(&mut self, tag: $crate::tags::Tag, id: $crate::node::NodeId) -> bool {
                $(
                    if matches!(tag, $($crate::tags::Tag::$tag)|+) {
                        $crate::structures::put!($card, self.$field, id);
                        return true;
                    }
                )*
                $(
                    if $crate::structures::Structure::store(&mut self.$bundle, tag, id) {
                        return true;
                    }
                )*
                false
            }
        }
    };
}

pub(crate) use put;
pub(crate) use slot;
pub(crate) use structure;

structure! {
    pub struct AddressStructure {
        one addr: Addr,
        many phon: Phon,
        many email: Email,
        many fax: Fax,
        many www: Www,
    }
}

structure! {
    pub struct AssociationStructure {
        one asso: Asso,
    }
}

structure! {
    pub struct ChangeDate {
        one chan: Chan,
    }
}

structure! {
    /// `FAMC` links from an individual to the families it is a child of.
    pub struct ChildToFamilyLink {
        many famc: Famc,
    }
}

structure! {
    /// `FAMS` links from an individual to the families it is a spouse in.
    pub struct SpouseToFamilyLink {
        many fams: Fams,
    }
}

structure! {
    pub struct PlaceStructure {
        one plac: Plac,
    }
}

structure! {
    pub struct MultimediaLink {
        many obje: Obje,
    }
}

structure! {
    pub struct NoteStructure {
        many note: Note,
    }
}

structure! {
    pub struct SourceCitation {
        many sour: Sour,
    }
}

structure! {
    /// Details common to every event and attribute.
    pub struct EventDetail {
        one r#type: Type,
        one date: Date,
        one agnc: Agnc,
        one reli: Reli,
        one caus: Caus,
        one resn: Resn,
        ..place: PlaceStructure,
        ..address: AddressStructure,
        ..notes: NoteStructure,
        ..sources: SourceCitation,
        ..media: MultimediaLink,
    }
}

structure! {
    pub struct IndividualEventDetail {
        one age: Age,
        ..detail: EventDetail,
    }
}

structure! {
    pub struct FamilyEventDetail {
        one husb: Husb,
        one wife: Wife,
        ..detail: EventDetail,
    }
}

structure! {
    /// The split-out parts of a personal name.
    pub struct PersonalNamePieces {
        one npfx: Npfx,
        one givn: Givn,
        one nick: Nick,
        one spfx: Spfx,
        one surn: Surn,
        one nsfx: Nsfx,
        ..notes: NoteStructure,
        ..sources: SourceCitation,
    }
}

structure! {
    pub struct PersonalNameStructure {
        many name: Name,
    }
}

structure! {
    pub struct IndividualEventStructure {
        many birt: Birt,
        many chr: Chr,
        many deat: Deat,
        many buri: Buri,
        many crem: Crem,
        many adop: Adop,
        many bapm: Bapm,
        many barm: Barm,
        many basm: Basm,
        many bles: Bles,
        many chra: Chra,
        many conf: Conf,
        many fcom: Fcom,
        many ordn: Ordn,
        many natu: Natu,
        many emig: Emig,
        many immi: Immi,
        many cens: Cens,
        many prob: Prob,
        many will: Will,
        many grad: Grad,
        many reti: Reti,
        many even: Even,
    }
}

structure! {
    pub struct IndividualAttributeStructure {
        many cast: Cast,
        many dscr: Dscr,
        many educ: Educ,
        many idno: Idno,
        many nati: Nati,
        many nchi: Nchi,
        many nmr: Nmr,
        many occu: Occu,
        many prop: Prop,
        many reli: Reli,
        many resi: Resi,
        many ssn: Ssn,
        many titl: Titl,
        many fact: Fact,
    }
}

structure! {
    pub struct LdsIndividualOrdinance {
        many bapl: Bapl,
        many conl: Conl,
        many endl: Endl,
        many slgc: Slgc,
    }
}

structure! {
    pub struct FamilyEventStructure {
        many anul: Anul,
        many cens: Cens,
        many div: Div,
        many divf: Divf,
        many enga: Enga,
        many marb: Marb,
        many marc: Marc,
        many marr: Marr,
        many marl: Marl,
        many mars: Mars,
        many resi: Resi,
        many even: Even,
    }
}

structure! {
    pub struct LdsSpouseSealing {
        many slgs: Slgs,
    }
}

structure! {
    pub struct SourceRepositoryCitation {
        many repo: Repo,
    }
}
