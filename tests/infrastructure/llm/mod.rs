mod workers_ai_text_model_test;
