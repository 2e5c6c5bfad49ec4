mod show_file_changed_in_commit;
mod show_file_missing_at_revision_fails;
