use angebot_core::OfferId;

/// A rendered offer PDF fetched from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferDocument {
    offer_id: OfferId,
    bytes: Vec<u8>,
}

impl OfferDocument {
    pub fn new(offer_id: OfferId, bytes: Vec<u8>) -> Self {
        Self { offer_id, bytes }
    }

    pub fn offer_id(&self) -> OfferId {
        self.offer_id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Suggested download name: `angebot-<id>.pdf`.
    pub fn file_name(&self) -> String {
        Self::file_name_for(self.offer_id)
    }

    pub fn file_name_for(offer_id: OfferId) -> String {
        format!("angebot-{offer_id}.pdf")
    }

    /// Whether the payload starts with the PDF magic bytes.
    pub fn looks_like_pdf(&self) -> bool {
        self.bytes.starts_with(b"%PDF")
    }
}
