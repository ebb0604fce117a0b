use crate::db::Record;
use crate::db::models::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::db::wire::{TeamMemberRow, TeamMemberWrite};

pub fn team_member_to_app(row: TeamMemberRow) -> TeamMember {
    TeamMember {
        id: row.id,
        name: row.name,
        role: row.role,
        email: row.email,
        phone: row.phone,
        standard_fee: row.standard_fee,
        no_rek: row.no_rek,
        reward_balance: row.reward_balance,
        rating: row.rating,
        performance_notes: row.performance_notes,
        portal_access_id: row.portal_access_id,
    }
}

pub fn team_member_to_wire(new: &NewTeamMember) -> TeamMemberWrite {
    TeamMemberWrite {
        name: Some(new.name.clone()),
        role: Some(new.role.clone()),
        email: Some(new.email.clone()),
        phone: Some(new.phone.clone()),
        standard_fee: Some(new.standard_fee),
        no_rek: new.no_rek.clone().map(Some),
        reward_balance: Some(new.reward_balance),
        rating: Some(new.rating),
        performance_notes: Some(new.performance_notes.clone()),
        portal_access_id: Some(new.portal_access_id.clone()),
    }
}

pub fn team_member_patch_to_wire(patch: &TeamMemberPatch) -> TeamMemberWrite {
    TeamMemberWrite {
        name: patch.name.clone(),
        role: patch.role.clone(),
        email: patch.email.clone(),
        phone: patch.phone.clone(),
        standard_fee: patch.standard_fee,
        no_rek: patch.no_rek.clone(),
        reward_balance: patch.reward_balance,
        rating: patch.rating,
        performance_notes: patch.performance_notes.clone(),
        portal_access_id: patch.portal_access_id.clone(),
    }
}

impl Record for TeamMember {
    const TABLE: &'static str = "team_members";
    const NAME: &'static str = "team member";

    type Row = TeamMemberRow;
    type New = NewTeamMember;
    type Patch = TeamMemberPatch;
    type Write = TeamMemberWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: TeamMemberRow) -> Self {
        team_member_to_app(row)
    }

    fn to_wire(new: &NewTeamMember) -> TeamMemberWrite {
        team_member_to_wire(new)
    }

    fn patch_to_wire(patch: &TeamMemberPatch) -> TeamMemberWrite {
        team_member_patch_to_wire(patch)
    }
}
