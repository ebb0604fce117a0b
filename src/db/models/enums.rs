//! Closed string sets stored in enumerated columns.
//!
//! Each enum serializes to the exact string the backend stores. Values
//! outside the known set are kept verbatim in `Other` so they round-trip
//! unchanged; this layer does not validate them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A stored value outside the known set.
            Other(String),
        }

        impl $name {
            /// The string stored in the backend column.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($text => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

string_enum! {
    /// Relationship stage of a client.
    ClientStatus {
        Lead => "Prospek",
        Active => "Aktif",
        Inactive => "Tidak Aktif",
        Lost => "Hilang",
    }
}

string_enum! {
    /// Whether the client books directly or through a vendor.
    ClientType {
        Direct => "Langsung",
        Vendor => "Vendor",
    }
}

string_enum! {
    /// Channel a lead first arrived through.
    ContactChannel {
        WhatsApp => "WhatsApp",
        Instagram => "Instagram",
        Website => "Website",
        Phone => "Telepon",
        Referral => "Referensi",
        SuggestionForm => "Form Saran",
        Others => "Lainnya",
    }
}

string_enum! {
    LeadStatus {
        Discussion => "Sedang Diskusi",
        FollowUp => "Menunggu Follow Up",
        Converted => "Dikonversi",
        Rejected => "Ditolak",
    }
}

string_enum! {
    PaymentStatus {
        Paid => "Lunas",
        DownPaymentPaid => "DP Terbayar",
        Unpaid => "Belum Bayar",
    }
}

string_enum! {
    /// Review state of a booking submitted through the public form.
    BookingStatus {
        New => "Baru",
        Confirmed => "Terkonfirmasi",
        Rejected => "Ditolak",
    }
}

string_enum! {
    TransactionType {
        Income => "Pemasukan",
        Expense => "Pengeluaran",
    }
}

string_enum! {
    PaymentMethod {
        BankTransfer => "Transfer Bank",
        Cash => "Tunai",
        EWallet => "E-Wallet",
        System => "Sistem",
        Card => "Kartu",
    }
}

string_enum! {
    PocketType {
        SavingGoal => "Nabung & Bayar",
        Locked => "Terkunci",
        Shared => "Bersama",
        ExpenseBudget => "Anggaran Pengeluaran",
        RewardPool => "Tabungan Hadiah Freelancer",
    }
}

string_enum! {
    /// Icon key rendered next to a pocket.
    PocketIcon {
        PiggyBank => "piggy-bank",
        Lock => "lock",
        Users => "users",
        ClipboardList => "clipboard-list",
        Star => "star",
    }
}

string_enum! {
    CardType {
        Prepaid => "Prabayar",
        Credit => "Kredit",
        Debit => "Debit",
    }
}

string_enum! {
    UserRole {
        Admin => "Admin",
        Member => "Member",
    }
}

string_enum! {
    RevisionStatus {
        Pending => "Menunggu Revisi",
        Completed => "Revisi Selesai",
    }
}

string_enum! {
    PerformanceNoteType {
        Praise => "Pujian",
        Concern => "Perhatian",
        LateDeadline => "Keterlambatan Deadline",
        General => "Umum",
    }
}

string_enum! {
    AssetStatus {
        Available => "Tersedia",
        InUse => "Digunakan",
        Maintenance => "Perbaikan",
    }
}

string_enum! {
    DiscountType {
        Percentage => "percentage",
        Fixed => "fixed",
    }
}

/// Project drafts start unpaid.
impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Unpaid
    }
}

string_enum! {
    /// How satisfied a client said they were.
    SatisfactionLevel {
        VerySatisfied => "Sangat Puas",
        Satisfied => "Puas",
        Neutral => "Biasa Saja",
        Unsatisfied => "Tidak Puas",
    }
}

string_enum! {
    PostType {
        InstagramFeed => "Instagram Feed",
        InstagramStory => "Instagram Story",
        InstagramReels => "Instagram Reels",
        TikTokVideo => "TikTok Video",
        BlogArticle => "Artikel Blog",
    }
}

string_enum! {
    PostStatus {
        Draft => "Draf",
        Scheduled => "Terjadwal",
        Posted => "Diposting",
        Canceled => "Dibatalkan",
    }
}

string_enum! {
    /// Whether a freelancer's fee for one project has been paid out.
    FeeStatus {
        Paid => "Paid",
        Unpaid => "Unpaid",
    }
}
