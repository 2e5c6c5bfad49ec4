mod walk_commits_interactively;
