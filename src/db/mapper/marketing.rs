use crate::db::Record;
use crate::db::models::{
    ClientFeedback, ClientFeedbackPatch, NewClientFeedback, NewSocialMediaPost, SocialMediaPost,
    SocialMediaPostPatch,
};
use crate::db::wire::{
    ClientFeedbackRow, ClientFeedbackWrite, SocialMediaPostRow, SocialMediaPostWrite,
};

pub fn client_feedback_to_app(row: ClientFeedbackRow) -> ClientFeedback {
    ClientFeedback {
        id: row.id,
        client_name: row.client_name,
        satisfaction: row.satisfaction,
        rating: row.rating,
        feedback: row.feedback,
        date: row.date,
    }
}

pub fn client_feedback_to_wire(new: &NewClientFeedback) -> ClientFeedbackWrite {
    ClientFeedbackWrite {
        client_name: Some(new.client_name.clone()),
        satisfaction: Some(new.satisfaction.clone()),
        rating: Some(new.rating),
        feedback: Some(new.feedback.clone()),
        date: Some(new.date.clone()),
    }
}

pub fn client_feedback_patch_to_wire(patch: &ClientFeedbackPatch) -> ClientFeedbackWrite {
    ClientFeedbackWrite {
        client_name: patch.client_name.clone(),
        satisfaction: patch.satisfaction.clone(),
        rating: patch.rating,
        feedback: patch.feedback.clone(),
        date: patch.date.clone(),
    }
}

impl Record for ClientFeedback {
    const TABLE: &'static str = "client_feedback";
    const NAME: &'static str = "client feedback";

    type Row = ClientFeedbackRow;
    type New = NewClientFeedback;
    type Patch = ClientFeedbackPatch;
    type Write = ClientFeedbackWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: ClientFeedbackRow) -> Self {
        client_feedback_to_app(row)
    }

    fn to_wire(new: &NewClientFeedback) -> ClientFeedbackWrite {
        client_feedback_to_wire(new)
    }

    fn patch_to_wire(patch: &ClientFeedbackPatch) -> ClientFeedbackWrite {
        client_feedback_patch_to_wire(patch)
    }
}

pub fn social_media_post_to_app(row: SocialMediaPostRow) -> SocialMediaPost {
    SocialMediaPost {
        id: row.id,
        project_id: row.project_id,
        client_name: row.client_name,
        post_type: row.post_type,
        platform: row.platform,
        scheduled_date: row.scheduled_date,
        caption: row.caption,
        media_url: row.media_url,
        status: row.status,
        notes: row.notes,
    }
}

pub fn social_media_post_to_wire(new: &NewSocialMediaPost) -> SocialMediaPostWrite {
    SocialMediaPostWrite {
        project_id: Some(new.project_id.clone()),
        client_name: Some(new.client_name.clone()),
        post_type: Some(new.post_type.clone()),
        platform: Some(new.platform.clone()),
        scheduled_date: Some(new.scheduled_date.clone()),
        caption: Some(new.caption.clone()),
        media_url: new.media_url.clone().map(Some),
        status: Some(new.status.clone()),
        notes: new.notes.clone().map(Some),
    }
}

pub fn social_media_post_patch_to_wire(patch: &SocialMediaPostPatch) -> SocialMediaPostWrite {
    SocialMediaPostWrite {
        project_id: patch.project_id.clone(),
        client_name: patch.client_name.clone(),
        post_type: patch.post_type.clone(),
        platform: patch.platform.clone(),
        scheduled_date: patch.scheduled_date.clone(),
        caption: patch.caption.clone(),
        media_url: patch.media_url.clone(),
        status: patch.status.clone(),
        notes: patch.notes.clone(),
    }
}

impl Record for SocialMediaPost {
    const TABLE: &'static str = "social_media_posts";
    const NAME: &'static str = "social media post";

    type Row = SocialMediaPostRow;
    type New = NewSocialMediaPost;
    type Patch = SocialMediaPostPatch;
    type Write = SocialMediaPostWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: SocialMediaPostRow) -> Self {
        social_media_post_to_app(row)
    }

    fn to_wire(new: &NewSocialMediaPost) -> SocialMediaPostWrite {
        social_media_post_to_wire(new)
    }

    fn patch_to_wire(patch: &SocialMediaPostPatch) -> SocialMediaPostWrite {
        social_media_post_patch_to_wire(patch)
    }
}
