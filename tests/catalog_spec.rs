use std::cell::RefCell;
use std::rc::Rc;

use campus::catalog::{
    CertifiedCourse, CompositeCourse, Course, CourseFactory, ProgrammingCourse,
    ProgrammingCourseFactory, WebCourseFactory,
};
use campus::error::CatalogError;
use campus::models::{Assignment, Question, Quiz, User, Video};
use campus::observer::{CourseObserver, CourseSubject};
use speculate2::speculate;
use uuid::Uuid;

/// Observer that appends "<name>:<course title>" to a shared log on every
/// delivery, so ordering across observers is visible.
struct RecordingObserver {
    id: Uuid,
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingObserver {
    fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Rc<Self> {
        Rc::new(Self {
            id: Uuid::new_v4(),
            name,
            log,
        })
    }
}

impl CourseObserver for RecordingObserver {
    fn observer_id(&self) -> Uuid {
        self.id
    }

    fn course_updated(&self, course: &dyn Course) {
        self.log
            .borrow_mut()
            .push(format!("{}:{}", self.name, course.title()));
    }
}

fn leaf(title: &str, description: &str) -> Rc<dyn Course> {
    ProgrammingCourseFactory.create_course(title, description)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

speculate! {
    before {
        init_tracing();
    }

    describe "course factories" {
        it "builds leaves readable through the course trait" {
            let java = ProgrammingCourseFactory.create_course("Java Programming", "Learn Java from scratch");
            let web = WebCourseFactory.create_course("Web Development", "Build modern web applications");

            assert_eq!(java.title(), "Java Programming");
            assert_eq!(java.description(), "Learn Java from scratch");
            assert_eq!(web.title(), "Web Development");
            assert_eq!(web.description(), "Build modern web applications");
        }

        it "gives every created course a distinct id" {
            let a = ProgrammingCourseFactory.create_course("A", "a");
            let b = ProgrammingCourseFactory.create_course("A", "a");
            assert_ne!(a.id(), b.id());
        }
    }

    describe "certified course decorator" {
        it "is transparent for title and description" {
            let course = leaf("Rust", "Systems programming");
            let certified = CertifiedCourse::new(course.clone(), "Professional Certificate");

            assert_eq!(certified.title(), course.title());
            assert_eq!(certified.description(), course.description());
            assert_eq!(certified.certification(), "Professional Certificate");

            // Purely additive: announcing leaves the wrapped course untouched.
            certified.announce();
            assert_eq!(certified.inner().title(), "Rust");
        }

        it "stays transparent through nested decorator stacks" {
            let course = leaf("Rust", "Systems programming");
            let once: Rc<dyn Course> = Rc::new(CertifiedCourse::new(course.clone(), "Level 1"));
            let twice: Rc<dyn Course> = Rc::new(CertifiedCourse::new(once, "Level 2"));
            let thrice = CertifiedCourse::new(twice, "Level 3");

            assert_eq!(thrice.title(), "Rust");
            assert_eq!(thrice.description(), "Systems programming");
        }

        it "has its own identity, separate from the wrapped course" {
            let course = leaf("Rust", "Systems programming");
            let certified = CertifiedCourse::new(course.clone(), "Cert");
            assert_ne!(certified.id(), course.id());
        }

        it "reports containment of the wrapped course" {
            let course = leaf("Rust", "Systems programming");
            let certified = CertifiedCourse::new(course.clone(), "Cert");
            assert!(certified.contains(course.id()));
        }

        it "does not turn a leaf into a notification subject" {
            let certified = CertifiedCourse::new(leaf("Rust", "r"), "Cert");
            assert!(certified.as_subject().is_none());
        }
    }

    describe "composite course" {
        it "keeps its own title rather than aggregating children" {
            let bundle = CompositeCourse::new("Bundle", "Everything at once");
            bundle.add_sub_course(leaf("Java", "j")).unwrap();
            bundle.add_sub_course(leaf("Web", "w")).unwrap();

            assert_eq!(bundle.title(), "Bundle");
            assert_eq!(bundle.description(), "Everything at once");
        }

        it "preserves insertion order of sub-courses" {
            let bundle = CompositeCourse::new("Bundle", "b");
            bundle.add_sub_course(leaf("First", "1")).unwrap();
            bundle.add_sub_course(leaf("Second", "2")).unwrap();
            bundle.add_sub_course(leaf("Third", "3")).unwrap();

            let titles: Vec<String> = bundle
                .sub_courses()
                .iter()
                .map(|c| c.title().to_string())
                .collect();
            assert_eq!(titles, vec!["First", "Second", "Third"]);
        }

        it "accepts nested composites and decorators as children" {
            let bundle = CompositeCourse::new("Bundle", "b");
            let inner = Rc::new(CompositeCourse::new("Inner", "i"));
            let certified: Rc<dyn Course> = Rc::new(CertifiedCourse::new(leaf("Rust", "r"), "Cert"));

            bundle.add_sub_course(inner).unwrap();
            bundle.add_sub_course(certified).unwrap();
            assert_eq!(bundle.sub_course_count(), 2);
        }

        it "round-trips an add/remove pair back to the prior sequence" {
            let bundle = CompositeCourse::new("Bundle", "b");
            bundle.add_sub_course(leaf("Java", "j")).unwrap();
            let before: Vec<Uuid> = bundle.sub_courses().iter().map(|c| c.id()).collect();

            let web = leaf("Web", "w");
            bundle.add_sub_course(web.clone()).unwrap();
            bundle.remove_sub_course(web.id());

            let after: Vec<Uuid> = bundle.sub_courses().iter().map(|c| c.id()).collect();
            assert_eq!(before, after);

            // And removing again is a no-op, not an error.
            bundle.remove_sub_course(web.id());
            assert_eq!(bundle.sub_course_count(), before.len());
        }

        it "removes only the first match when duplicates exist" {
            let bundle = CompositeCourse::new("Bundle", "b");
            let java = leaf("Java", "j");
            bundle.add_sub_course(java.clone()).unwrap();
            bundle.add_sub_course(java.clone()).unwrap();

            bundle.remove_sub_course(java.id());
            assert_eq!(bundle.sub_course_count(), 1);
        }

        it "rejects adding itself as a sub-course" {
            let bundle = Rc::new(CompositeCourse::new("Bundle", "b"));
            let result = bundle.add_sub_course(bundle.clone());

            assert!(matches!(result, Err(CatalogError::SubCourseCycle { .. })));
            assert_eq!(bundle.sub_course_count(), 0);
        }

        it "rejects a cycle through a nested chain" {
            let outer = Rc::new(CompositeCourse::new("Outer", "o"));
            let inner = Rc::new(CompositeCourse::new("Inner", "i"));
            outer.add_sub_course(inner.clone()).unwrap();

            let result = inner.add_sub_course(outer.clone());
            assert!(matches!(result, Err(CatalogError::SubCourseCycle { .. })));
            assert_eq!(inner.sub_course_count(), 0);
        }

        it "rejects a cycle hidden behind a decorator" {
            let bundle = Rc::new(CompositeCourse::new("Bundle", "b"));
            let disguised: Rc<dyn Course> = Rc::new(CertifiedCourse::new(bundle.clone(), "Cert"));

            let result = bundle.add_sub_course(disguised);
            assert!(matches!(result, Err(CatalogError::SubCourseCycle { .. })));
            assert_eq!(bundle.sub_course_count(), 0);
        }
    }

    describe "change notification" {
        before {
            let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
            let bundle = CompositeCourse::new("Bundle", "b");
        }

        it "notifies each observer exactly once, in registration order" {
            let first = RecordingObserver::new("first", log.clone());
            let second = RecordingObserver::new("second", log.clone());
            bundle.register_observer(first);
            bundle.register_observer(second);

            bundle.notify_observers();

            assert_eq!(*log.borrow(), vec!["first:Bundle", "second:Bundle"]);
        }

        it "delivers twice to a twice-registered observer" {
            let observer = RecordingObserver::new("dup", log.clone());
            bundle.register_observer(observer.clone());
            bundle.register_observer(observer);

            bundle.notify_observers();
            assert_eq!(log.borrow().len(), 2);
        }

        it "stops notifying a removed observer" {
            let kept = RecordingObserver::new("kept", log.clone());
            let dropped = RecordingObserver::new("dropped", log.clone());
            let dropped_id = dropped.observer_id();
            bundle.register_observer(kept);
            bundle.register_observer(dropped);

            bundle.remove_observer(dropped_id);
            bundle.notify_observers();

            assert_eq!(*log.borrow(), vec!["kept:Bundle"]);
        }

        it "removing an unknown observer is a no-op" {
            bundle.register_observer(RecordingObserver::new("only", log.clone()));
            bundle.remove_observer(Uuid::new_v4());
            assert_eq!(bundle.observer_count(), 1);
        }

        it "does not notify on structural changes by itself" {
            bundle.register_observer(RecordingObserver::new("quiet", log.clone()));

            let web = leaf("Web", "w");
            bundle.add_sub_course(web.clone()).unwrap();
            bundle.remove_sub_course(web.id());

            assert!(log.borrow().is_empty());
        }

        it "notifies users through their observer capability" {
            let user = Rc::new(User::new("jomanah", "jomanah@example.com", false));
            bundle.register_observer(user.clone());

            bundle.notify_observers();
            bundle.notify_observers();

            assert_eq!(user.notifications(), vec!["Bundle", "Bundle"]);
        }
    }

    describe "content records" {
        it "attaches videos, quizzes, and assignments to a leaf course" {
            let mut course = ProgrammingCourse::new("Java", "j");
            course.add_video(Video::new("Intro", "https://example.com/intro", 12));

            let mut quiz = Quiz::new("Basics");
            quiz.questions.push(Question::new(
                "What keyword declares a constant?",
                vec!["let".to_string(), "final".to_string(), "var".to_string()],
                1,
            ));
            course.add_quiz(quiz);

            course.add_assignment(Assignment::new(
                "Hello world",
                "Write and run a program",
                "https://example.com/submit",
            ));

            assert_eq!(course.content().videos.len(), 1);
            assert_eq!(course.content().quizzes[0].questions.len(), 1);
            assert_eq!(course.content().assignments.len(), 1);
        }

        it "serializes records with snake_case field names" {
            let video = Video::new("Intro", "https://example.com/intro", 12);
            let value = serde_json::to_value(&video).expect("video should serialize");
            assert_eq!(value["duration_minutes"], 12);
            assert_eq!(value["title"], "Intro");
        }

        it "round-trips a user record without its notification feed" {
            let user = Rc::new(User::new("jane", "jane@example.com", true));
            let bundle = CompositeCourse::new("Bundle", "b");
            bundle.register_observer(user.clone());
            bundle.notify_observers();

            let json = serde_json::to_string(&user).expect("user should serialize");
            assert!(!json.contains("notifications"));

            let restored: User = serde_json::from_str(&json).expect("user should deserialize");
            assert_eq!(restored.username, "jane");
            assert!(restored.is_instructor);
            assert!(restored.notifications().is_empty());
        }
    }
}
