//! Table rows for each entity.

use tabled::Tabled;

use crate::cli::utils::{format_amount, format_flag, format_optional, truncate_with_ellipsis};
use crate::db::Record;
use crate::db::models::*;

/// An entity that can be listed as a table row.
pub trait Listing: Record {
    type View: Tabled;

    fn view(&self) -> Self::View;
}

#[derive(Tabled)]
pub struct ClientView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Type")]
    pub client_type: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
    #[tabled(rename = "Last Contact")]
    pub last_contact: String,
}

impl Listing for Client {
    type View = ClientView;

    fn view(&self) -> ClientView {
        ClientView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            status: self.status.to_string(),
            client_type: self.client_type.to_string(),
            phone: self.phone.clone(),
            last_contact: self.last_contact.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct LeadView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Channel")]
    pub channel: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Date")]
    pub date: String,
}

impl Listing for Lead {
    type View = LeadView;

    fn view(&self) -> LeadView {
        LeadView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            channel: self.contact_channel.to_string(),
            status: self.status.to_string(),
            location: truncate_with_ellipsis(&self.location, 30),
            date: self.date.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct PackageView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Processing")]
    pub processing_time: String,
}

impl Listing for Package {
    type View = PackageView;

    fn view(&self) -> PackageView {
        PackageView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            category: self.category.clone(),
            price: format_amount(self.price),
            processing_time: self.processing_time.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct AddOnView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
}

impl Listing for AddOn {
    type View = AddOnView;

    fn view(&self) -> AddOnView {
        AddOnView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            price: format_amount(self.price),
        }
    }
}

#[derive(Tabled)]
pub struct ProjectView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Project")]
    pub project_name: String,
    #[tabled(rename = "Client")]
    pub client_name: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Progress")]
    pub progress: String,
    #[tabled(rename = "Payment")]
    pub payment_status: String,
    #[tabled(rename = "Total")]
    pub total_cost: String,
}

impl Listing for Project {
    type View = ProjectView;

    fn view(&self) -> ProjectView {
        ProjectView {
            id: self.id.clone(),
            project_name: truncate_with_ellipsis(&self.project_name, 40),
            client_name: truncate_with_ellipsis(&self.client_name, 30),
            date: self.date.clone(),
            status: self.status.clone(),
            progress: format!("{}%", self.progress),
            payment_status: self.payment_status.to_string(),
            total_cost: format_amount(self.total_cost),
        }
    }
}

#[derive(Tabled)]
pub struct TeamMemberView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "Fee")]
    pub standard_fee: String,
    #[tabled(rename = "Rating")]
    pub rating: String,
}

impl Listing for TeamMember {
    type View = TeamMemberView;

    fn view(&self) -> TeamMemberView {
        TeamMemberView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            role: self.role.clone(),
            standard_fee: format_amount(self.standard_fee),
            rating: format!("{:.1}", self.rating),
        }
    }
}

#[derive(Tabled)]
pub struct TransactionView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Method")]
    pub method: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

impl Listing for Transaction {
    type View = TransactionView;

    fn view(&self) -> TransactionView {
        TransactionView {
            id: self.id.clone(),
            date: self.date.clone(),
            kind: self.kind.to_string(),
            amount: format_amount(self.amount),
            category: self.category.clone(),
            method: self.method.to_string(),
            description: truncate_with_ellipsis(&self.description, 40),
        }
    }
}

#[derive(Tabled)]
pub struct FinancialPocketView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Goal")]
    pub goal_amount: String,
}

impl Listing for FinancialPocket {
    type View = FinancialPocketView;

    fn view(&self) -> FinancialPocketView {
        FinancialPocketView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            kind: self.kind.to_string(),
            amount: format_amount(self.amount),
            goal_amount: format_optional(self.goal_amount.map(format_amount)),
        }
    }
}

#[derive(Tabled)]
pub struct CardView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Holder")]
    pub card_holder_name: String,
    #[tabled(rename = "Bank")]
    pub bank_name: String,
    #[tabled(rename = "Type")]
    pub card_type: String,
    #[tabled(rename = "Number")]
    pub last_four_digits: String,
    #[tabled(rename = "Balance")]
    pub balance: String,
}

impl Listing for Card {
    type View = CardView;

    fn view(&self) -> CardView {
        CardView {
            id: self.id.clone(),
            card_holder_name: self.card_holder_name.clone(),
            bank_name: self.bank_name.clone(),
            card_type: self.card_type.to_string(),
            last_four_digits: format!("**** {}", self.last_four_digits),
            balance: format_amount(self.balance),
        }
    }
}

#[derive(Tabled)]
pub struct ProfileView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Company")]
    pub company_name: String,
    #[tabled(rename = "Owner")]
    pub full_name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
}

impl Listing for Profile {
    type View = ProfileView;

    fn view(&self) -> ProfileView {
        ProfileView {
            id: self.id.clone(),
            company_name: self.company_name.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct UserView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Name")]
    pub full_name: String,
    #[tabled(rename = "Role")]
    pub role: String,
}

impl Listing for User {
    type View = UserView;

    fn view(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct AssetView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Price")]
    pub purchase_price: String,
}

impl Listing for Asset {
    type View = AssetView;

    fn view(&self) -> AssetView {
        AssetView {
            id: self.id.clone(),
            name: truncate_with_ellipsis(&self.name, 40),
            category: self.category.clone(),
            status: self.status.to_string(),
            purchase_price: format_amount(self.purchase_price),
        }
    }
}

#[derive(Tabled)]
pub struct PromoCodeView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Discount")]
    pub discount: String,
    #[tabled(rename = "Active")]
    pub is_active: String,
    #[tabled(rename = "Used")]
    pub usage: String,
}

impl Listing for PromoCode {
    type View = PromoCodeView;

    fn view(&self) -> PromoCodeView {
        let discount = if self.discount_type == DiscountType::Percentage {
            format!("{}%", self.discount_value)
        } else {
            format_amount(self.discount_value)
        };
        let usage = match self.max_usage {
            Some(max) => format!("{}/{}", self.usage_count, max),
            None => self.usage_count.to_string(),
        };
        PromoCodeView {
            id: self.id.clone(),
            code: self.code.clone(),
            discount,
            is_active: format_flag(self.is_active),
            usage,
        }
    }
}

#[derive(Tabled)]
pub struct SopView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Updated")]
    pub last_updated: String,
}

impl Listing for Sop {
    type View = SopView;

    fn view(&self) -> SopView {
        SopView {
            id: self.id.clone(),
            title: truncate_with_ellipsis(&self.title, 50),
            category: self.category.clone(),
            last_updated: self.last_updated.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct NotificationView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Time")]
    pub timestamp: String,
    #[tabled(rename = "Read")]
    pub is_read: String,
}

impl Listing for Notification {
    type View = NotificationView;

    fn view(&self) -> NotificationView {
        NotificationView {
            id: self.id.clone(),
            title: truncate_with_ellipsis(&self.title, 50),
            timestamp: self.timestamp.clone(),
            is_read: format_flag(self.is_read),
        }
    }
}

#[derive(Tabled)]
pub struct ContractView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Number")]
    pub contract_number: String,
    #[tabled(rename = "Client")]
    pub client: String,
    #[tabled(rename = "Signed")]
    pub signing_date: String,
    #[tabled(rename = "Client Signed")]
    pub client_signed: String,
}

impl Listing for Contract {
    type View = ContractView;

    fn view(&self) -> ContractView {
        ContractView {
            id: self.id.clone(),
            contract_number: self.contract_number.clone(),
            client: truncate_with_ellipsis(&self.client_name1, 40),
            signing_date: self.signing_date.clone(),
            client_signed: format_flag(self.client_signature.is_some()),
        }
    }
}

#[derive(Tabled)]
pub struct ClientFeedbackView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Client")]
    pub client_name: String,
    #[tabled(rename = "Satisfaction")]
    pub satisfaction: String,
    #[tabled(rename = "Rating")]
    pub rating: String,
    #[tabled(rename = "Date")]
    pub date: String,
}

impl Listing for ClientFeedback {
    type View = ClientFeedbackView;

    fn view(&self) -> ClientFeedbackView {
        ClientFeedbackView {
            id: self.id.clone(),
            client_name: truncate_with_ellipsis(&self.client_name, 40),
            satisfaction: self.satisfaction.to_string(),
            rating: self.rating.to_string(),
            date: self.date.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct SocialMediaPostView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Client")]
    pub client_name: String,
    #[tabled(rename = "Type")]
    pub post_type: String,
    #[tabled(rename = "Platform")]
    pub platform: String,
    #[tabled(rename = "Scheduled")]
    pub scheduled_date: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl Listing for SocialMediaPost {
    type View = SocialMediaPostView;

    fn view(&self) -> SocialMediaPostView {
        SocialMediaPostView {
            id: self.id.clone(),
            client_name: truncate_with_ellipsis(&self.client_name, 30),
            post_type: self.post_type.to_string(),
            platform: self.platform.clone(),
            scheduled_date: self.scheduled_date.clone(),
            status: self.status.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct TeamProjectPaymentView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Member")]
    pub team_member_name: String,
    #[tabled(rename = "Project")]
    pub project_id: String,
    #[tabled(rename = "Fee")]
    pub fee: String,
    #[tabled(rename = "Reward")]
    pub reward: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl Listing for TeamProjectPayment {
    type View = TeamProjectPaymentView;

    fn view(&self) -> TeamProjectPaymentView {
        TeamProjectPaymentView {
            id: self.id.clone(),
            team_member_name: truncate_with_ellipsis(&self.team_member_name, 30),
            project_id: self.project_id.clone(),
            fee: format_amount(self.fee),
            reward: format_optional(self.reward.map(format_amount)),
            status: self.status.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct TeamPaymentRecordView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Number")]
    pub record_number: String,
    #[tabled(rename = "Member")]
    pub team_member_id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Projects")]
    pub projects: usize,
    #[tabled(rename = "Total")]
    pub total_amount: String,
}

impl Listing for TeamPaymentRecord {
    type View = TeamPaymentRecordView;

    fn view(&self) -> TeamPaymentRecordView {
        TeamPaymentRecordView {
            id: self.id.clone(),
            record_number: self.record_number.clone(),
            team_member_id: self.team_member_id.clone(),
            date: self.date.clone(),
            projects: self.project_payment_ids.len(),
            total_amount: format_amount(self.total_amount),
        }
    }
}

#[derive(Tabled)]
pub struct RewardLedgerEntryView {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Member")]
    pub team_member_id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl Listing for RewardLedgerEntry {
    type View = RewardLedgerEntryView;

    fn view(&self) -> RewardLedgerEntryView {
        RewardLedgerEntryView {
            id: self.id.clone(),
            team_member_id: self.team_member_id.clone(),
            date: self.date.clone(),
            description: truncate_with_ellipsis(&self.description, 40),
            amount: format_amount(self.amount),
        }
    }
}
