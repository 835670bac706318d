//! Identity records and display-name extraction
//!
//! Identity fields are stored as a tagged `Data` value rather than a plain
//! string. Only the raw variant carries text; the hashed variants commit to a
//! value that lives off-chain. Reading the display name therefore has three
//! distinct ways to come back empty, and [`DisplayName`] keeps them apart.

use scale_codec::{Decode, DecodeAll, Encode, Input, Output};

use crate::error::{Error, Result};

/// Longest payload the raw variant can hold.
pub const MAX_RAW_LEN: usize = 32;

const TAG_NONE: u8 = 0;
const TAG_BLAKE2_256: u8 = 34;
const TAG_SHA256: u8 = 35;
const TAG_KECCAK256: u8 = 36;
const TAG_SHA3_256: u8 = 37;

/// On-chain identity field value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Data {
    #[default]
    None,
    /// Up to 32 bytes stored inline; see [`Data::raw`]
    Raw(Vec<u8>),
    BlakeTwo256([u8; 32]),
    Sha256([u8; 32]),
    Keccak256([u8; 32]),
    ShaThree256([u8; 32]),
}

/// Variant of a [`Data`] value without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// Raw bytes that are not valid UTF-8
    Binary,
    BlakeTwo256,
    Sha256,
    Keccak256,
    ShaThree256,
}

impl Data {
    /// Inline value, or `None` if `bytes` is longer than [`MAX_RAW_LEN`].
    pub fn raw(bytes: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = bytes.into();
        (bytes.len() <= MAX_RAW_LEN).then_some(Data::Raw(bytes))
    }

    /// Text content, if this is a raw value holding valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Data::Raw(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Data::None)
    }

    fn kind(&self) -> Option<DataKind> {
        match self {
            Data::None => None,
            Data::Raw(_) => Some(DataKind::Binary),
            Data::BlakeTwo256(_) => Some(DataKind::BlakeTwo256),
            Data::Sha256(_) => Some(DataKind::Sha256),
            Data::Keccak256(_) => Some(DataKind::Keccak256),
            Data::ShaThree256(_) => Some(DataKind::ShaThree256),
        }
    }
}

impl Decode for Data {
    fn decode<I: Input>(input: &mut I) -> std::result::Result<Self, scale_codec::Error> {
        let tag = input.read_byte()?;
        let data = match tag {
            TAG_NONE => Data::None,
            1..=33 => {
                let mut bytes = vec![0u8; tag as usize - 1];
                input.read(&mut bytes)?;
                Data::Raw(bytes)
            }
            TAG_BLAKE2_256 => Data::BlakeTwo256(<[u8; 32]>::decode(input)?),
            TAG_SHA256 => Data::Sha256(<[u8; 32]>::decode(input)?),
            TAG_KECCAK256 => Data::Keccak256(<[u8; 32]>::decode(input)?),
            TAG_SHA3_256 => Data::ShaThree256(<[u8; 32]>::decode(input)?),
            _ => return Err("invalid identity data tag".into()),
        };
        Ok(data)
    }
}

/// A `Raw` payload longer than [`MAX_RAW_LEN`] cannot be represented on chain
/// and is written truncated to its first 32 bytes. Build values with
/// [`Data::raw`] to reject those up front.
impl Encode for Data {
    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        match self {
            Data::None => dest.push_byte(TAG_NONE),
            Data::Raw(bytes) => {
                let len = bytes.len().min(MAX_RAW_LEN);
                dest.push_byte(len as u8 + 1);
                dest.write(&bytes[..len]);
            }
            Data::BlakeTwo256(h) => {
                dest.push_byte(TAG_BLAKE2_256);
                dest.write(h);
            }
            Data::Sha256(h) => {
                dest.push_byte(TAG_SHA256);
                dest.write(h);
            }
            Data::Keccak256(h) => {
                dest.push_byte(TAG_KECCAK256);
                dest.write(h);
            }
            Data::ShaThree256(h) => {
                dest.push_byte(TAG_SHA3_256);
                dest.write(h);
            }
        }
    }
}

/// Registrar verdict on an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum Judgement {
    Unknown,
    FeePaid(u128),
    Reasonable,
    KnownGood,
    OutOfDate,
    LowQuality,
    Erroneous,
}

/// Identity fields as stored by relay-chain `pallet_identity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct LegacyIdentityInfo {
    pub additional: Vec<(Data, Data)>,
    pub display: Data,
    pub legal: Data,
    pub web: Data,
    pub riot: Data,
    pub email: Data,
    pub pgp_fingerprint: Option<[u8; 20]>,
    pub image: Data,
    pub twitter: Data,
}

/// Identity fields as stored on the People chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct PeopleIdentityInfo {
    pub display: Data,
    pub legal: Data,
    pub web: Data,
    pub matrix: Data,
    pub email: Data,
    pub pgp_fingerprint: Option<[u8; 20]>,
    pub image: Data,
    pub twitter: Data,
    pub github: Data,
    pub discord: Data,
}

/// Identity fields in whichever layout the runtime stores.
///
/// Encodes as the inner struct, with no variant tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityInfo {
    Legacy(LegacyIdentityInfo),
    People(PeopleIdentityInfo),
}

impl IdentityInfo {
    pub fn display(&self) -> &Data {
        match self {
            IdentityInfo::Legacy(info) => &info.display,
            IdentityInfo::People(info) => &info.display,
        }
    }
}

impl Default for IdentityInfo {
    fn default() -> Self {
        IdentityInfo::People(PeopleIdentityInfo::default())
    }
}

impl Encode for IdentityInfo {
    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        match self {
            IdentityInfo::Legacy(info) => info.encode_to(dest),
            IdentityInfo::People(info) => info.encode_to(dest),
        }
    }
}

/// `Identity::IdentityOf` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub judgements: Vec<(u32, Judgement)>,
    pub deposit: u128,
    pub info: IdentityInfo,
}

/// Registration as laid out in storage for one identity layout.
#[derive(Decode)]
struct StoredRegistration<I> {
    judgements: Vec<(u32, Judgement)>,
    deposit: u128,
    info: I,
}

impl Encode for Registration {
    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.judgements.encode_to(dest);
        self.deposit.encode_to(dest);
        self.info.encode_to(dest);
    }
}

impl<I> StoredRegistration<I> {
    fn into_registration(self, wrap: fn(I) -> IdentityInfo) -> Registration {
        Registration { judgements: self.judgements, deposit: self.deposit, info: wrap(self.info) }
    }
}

impl Registration {
    /// Decode an `IdentityOf` value.
    ///
    /// The People chain layout is tried first, then the relay-chain one.
    /// Runtimes that shipped on-chain usernames stored `(Registration,
    /// Option<Username>)`; that wrapping is accepted for either layout once
    /// both plain layouts have failed, and the username is dropped.
    pub fn from_storage(raw: &[u8]) -> Result<Self> {
        Self::decode_layout(raw, IdentityInfo::People)
            .or_else(|| Self::decode_layout(raw, IdentityInfo::Legacy))
            .or_else(|| Self::decode_layout_with_username(raw, IdentityInfo::People))
            .or_else(|| Self::decode_layout_with_username(raw, IdentityInfo::Legacy))
            .ok_or_else(|| {
                Error::Decode(format!("Identity::IdentityOf ({} bytes): no known registration layout", raw.len()))
            })
    }

    fn decode_layout<I: Decode>(raw: &[u8], wrap: fn(I) -> IdentityInfo) -> Option<Self> {
        StoredRegistration::<I>::decode_all(&mut &raw[..])
            .ok()
            .map(|stored| stored.into_registration(wrap))
    }

    fn decode_layout_with_username<I: Decode>(raw: &[u8], wrap: fn(I) -> IdentityInfo) -> Option<Self> {
        <(StoredRegistration<I>, Option<Vec<u8>>)>::decode_all(&mut &raw[..])
            .ok()
            .map(|(stored, _username)| stored.into_registration(wrap))
    }
}

/// Outcome of a display-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayName {
    /// The account has no identity record
    NoIdentity,
    /// The record exists but its display field is empty
    NotSet,
    /// The display field holds a value that is not text
    NotText(DataKind),
    Text(String),
}

impl DisplayName {
    pub fn from_registration(registration: &Registration) -> Self {
        let display = registration.info.display();
        match (display.as_text(), display.kind()) {
            (Some(text), _) => DisplayName::Text(text.to_owned()),
            (None, Some(kind)) => DisplayName::NotText(kind),
            (None, None) => DisplayName::NotSet,
        }
    }

    /// Resolve from a raw storage value; `None` means no record.
    pub fn from_storage(raw: Option<&[u8]>) -> Result<Self> {
        match raw {
            None => Ok(DisplayName::NoIdentity),
            Some(raw) => Registration::from_storage(raw).map(|r| Self::from_registration(&r)),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayName::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            DisplayName::Text(text) => Some(text),
            _ => None,
        }
    }
}
