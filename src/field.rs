//! Mapping from the field keys a condition table uses to record-store fields

/// A searchable patent record field
///
/// Conditions name fields by their frontend key (`applicant`, `title`, ...);
/// the record store knows them by storage name (`applicantName`,
/// `inventionTitle`, ...). Keys outside the known set become
/// [`SearchField::Other`] and are passed to the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchField {
    DocumentNumber,    // document, documentNum
    ApplicationNumber, // application, applicationNum
    ApplicationDate,   // applicationDate, filingDate
    PublicationDate,   // publicationDate
    InventionTitle,    // title, inventionTitle
    ApplicantName,     // applicant, applicantName
    /// Unmapped key, used verbatim as the storage field name
    Other(String),
}

impl SearchField {
    /// Every mapped field, in display order
    pub const KNOWN: [SearchField; 6] = [
        SearchField::DocumentNumber,
        SearchField::ApplicationNumber,
        SearchField::ApplicationDate,
        SearchField::PublicationDate,
        SearchField::InventionTitle,
        SearchField::ApplicantName,
    ];

    /// Resolve a frontend field key. Storage names are accepted as aliases.
    pub fn from_key(key: &str) -> Self {
        match key {
            "document" | "documentNum" => SearchField::DocumentNumber,
            "application" | "applicationNum" => SearchField::ApplicationNumber,
            "applicationDate" | "filingDate" => SearchField::ApplicationDate,
            "publicationDate" => SearchField::PublicationDate,
            "title" | "inventionTitle" => SearchField::InventionTitle,
            "applicant" | "applicantName" => SearchField::ApplicantName,
            other => SearchField::Other(other.to_string()),
        }
    }

    /// Canonical frontend key
    pub fn key(&self) -> &str {
        match self {
            SearchField::DocumentNumber => "document",
            SearchField::ApplicationNumber => "application",
            SearchField::ApplicationDate => "applicationDate",
            SearchField::PublicationDate => "publicationDate",
            SearchField::InventionTitle => "title",
            SearchField::ApplicantName => "applicant",
            SearchField::Other(key) => key,
        }
    }

    /// Field name in the record store
    pub fn storage_name(&self) -> &str {
        match self {
            SearchField::DocumentNumber => "documentNum",
            SearchField::ApplicationNumber => "applicationNum",
            SearchField::ApplicationDate => "applicationDate",
            SearchField::PublicationDate => "publicationDate",
            SearchField::InventionTitle => "inventionTitle",
            SearchField::ApplicantName => "applicantName",
            SearchField::Other(key) => key,
        }
    }

    /// Date fields are matched by exact date; everything else by substring
    pub fn is_date(&self) -> bool {
        matches!(
            self,
            SearchField::ApplicationDate | SearchField::PublicationDate
        )
    }
}
