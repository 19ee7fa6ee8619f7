mod record_draft;
