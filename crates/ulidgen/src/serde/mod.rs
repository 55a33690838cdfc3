mod ulid;
