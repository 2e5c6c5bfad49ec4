mod highlight_files_with_bracket_markers;
